use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const RC_FILE_NAME: &str = ".sasjsrc";

/// Local rc file path.
///
/// `SASCLI_RC` overrides the default location (used by tests and scripting).
pub fn rc_file() -> Result<PathBuf> {
    if let Ok(path) = env::var("SASCLI_RC") {
        if !path.is_empty() {
            return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
        }
    }

    #[cfg(windows)]
    {
        let profile = env::var("USERPROFILE").map_err(|_| {
            Error::internal_unexpected("USERPROFILE environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(profile).join(RC_FILE_NAME))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(RC_FILE_NAME))
    }
}
