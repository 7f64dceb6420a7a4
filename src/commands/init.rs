use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use sascli::scaffold::{self, GitignoreAction, NpmSetup};

use super::CmdResult;

#[derive(Args)]
pub struct InitArgs {
    /// Project folder (defaults to the current directory)
    #[arg(default_value = ".")]
    pub folder: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOutput {
    pub command: &'static str,
    pub folder: String,
    pub npm: NpmSetup,
    pub gitignore: GitignoreAction,
}

pub fn run_json(args: InitArgs) -> CmdResult<InitOutput> {
    let folder = PathBuf::from(shellexpand::tilde(&args.folder).into_owned());

    let npm = scaffold::setup_npm_project(&folder)?;
    let gitignore = scaffold::setup_gitignore(&folder)?;

    Ok((
        InitOutput {
            command: "init",
            folder: folder.display().to_string(),
            npm,
            gitignore,
        },
        0,
    ))
}
