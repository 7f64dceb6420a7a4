//! Shell script execution with captured output.

use crate::error::{Error, Result};
use crate::core::error::ShellCommandFailedDetails;
use crate::utils::{command, io};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutput {
    pub script: String,
    pub stdout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

/// Run a script via bash, capturing stdout and stderr.
///
/// On success, stdout is returned and optionally written to `log_file`.
/// A non-zero exit is a structured error carrying the exit code and both
/// captured streams.
pub fn execute_shell_script(script: &Path, log_file: Option<&Path>) -> Result<ScriptOutput> {
    let script_arg = script.to_string_lossy();
    let result = command::capture("bash", &[script_arg.as_ref()])?;

    if result.exit_code != 0 {
        return Err(Error::shell_command_failed(ShellCommandFailedDetails {
            command: format!("bash {}", script.display()),
            exit_code: result.exit_code,
            stdout: result.stdout,
            stderr: result.stderr,
        }));
    }

    if let Some(log) = log_file {
        io::write_file(log, &result.stdout, "write script log")?;
        log_status!("run", "Wrote script output to {}", log.display());
    }

    Ok(ScriptOutput {
        script: script.display().to_string(),
        stdout: result.stdout,
        log_file: log_file.map(|p| p.display().to_string()),
    })
}
