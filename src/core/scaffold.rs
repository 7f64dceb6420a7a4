//! Node project scaffolding.

use crate::error::Result;
use crate::utils::{command, io};
use serde::Serialize;
use std::path::Path;

pub const GITIGNORE_DEFAULT: &str = "node_modules/\nsasjsbuild/\n.env\n";
pub const GITIGNORE_BUILD_ENTRY: &str = "sasjsbuild/";

const NPM_DEPENDENCY: &str = "macrocore";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GitignoreAction {
    Created,
    Updated,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmSetup {
    pub initialized: bool,
    pub installed: &'static str,
}

/// A folder is an existing project when it already has a package.json.
pub fn in_existing_project(folder: &Path) -> bool {
    folder.join("package.json").exists()
}

/// Initialise an npm project if needed, then install the macro dependency.
pub fn setup_npm_project(folder: &Path) -> Result<NpmSetup> {
    let initialized = if in_existing_project(folder) {
        log_status!("init", "Existing npm project detected in {}", folder.display());
        false
    } else {
        log_status!("init", "Initialising npm project in {}", folder.display());
        command::run_in(folder, "npm", &["init", "--yes"], "npm init")?;
        true
    };

    log_status!("init", "Installing {}", NPM_DEPENDENCY);
    command::run_in(
        folder,
        "npm",
        &["install", NPM_DEPENDENCY, "--save"],
        "npm install",
    )?;

    Ok(NpmSetup {
        initialized,
        installed: NPM_DEPENDENCY,
    })
}

/// Create the .gitignore with default entries, or append the build
/// directory entry to an existing one.
pub fn setup_gitignore(folder: &Path) -> Result<GitignoreAction> {
    let path = folder.join(".gitignore");

    if path.exists() {
        let content = io::read_file(&path, "read .gitignore")?;
        io::write_file(
            &path,
            &format!("{}\n{}\n", content, GITIGNORE_BUILD_ENTRY),
            "update .gitignore",
        )?;
        log_status!("init", "Existing .gitignore updated");
        Ok(GitignoreAction::Updated)
    } else {
        io::write_file(&path, GITIGNORE_DEFAULT, "create .gitignore")?;
        log_status!("init", "Created .gitignore file");
        Ok(GitignoreAction::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn detects_existing_project_by_package_json() {
        let dir = tempdir().unwrap();
        assert!(!in_existing_project(dir.path()));

        fs::write(dir.path().join("package.json"), "{}").unwrap();
        assert!(in_existing_project(dir.path()));
    }

    #[test]
    fn creates_gitignore_with_default_entries() {
        let dir = tempdir().unwrap();

        let action = setup_gitignore(dir.path()).unwrap();
        assert_eq!(action, GitignoreAction::Created);

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(content.contains("node_modules/"));
        assert!(content.contains("sasjsbuild/"));
        assert!(content.contains(".env"));
    }

    #[test]
    fn appends_build_entry_to_existing_gitignore() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "dist/").unwrap();

        let action = setup_gitignore(dir.path()).unwrap();
        assert_eq!(action, GitignoreAction::Updated);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("dist/"));
        assert!(content.contains("sasjsbuild/"));
    }
}
