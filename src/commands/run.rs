use std::path::PathBuf;

use clap::Args;

use sascli::script::{self, ScriptOutput};

use super::CmdResult;

#[derive(Args)]
pub struct RunArgs {
    /// Shell script to execute
    pub script: String,

    /// Write captured stdout to this log file
    #[arg(long)]
    pub log: Option<String>,
}

pub fn run(args: RunArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ScriptOutput> {
    let script = PathBuf::from(shellexpand::tilde(&args.script).into_owned());
    let log = args
        .log
        .as_ref()
        .map(|l| PathBuf::from(shellexpand::tilde(l).into_owned()));

    let output = script::execute_shell_script(&script, log.as_deref())?;
    Ok((output, 0))
}
