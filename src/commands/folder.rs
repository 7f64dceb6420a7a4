use clap::{Args, Subcommand};

use sascli::config;
use sascli::folder::{self, MoveOutput};

use super::CmdResult;

#[derive(Args)]
pub struct FolderArgs {
    #[command(subcommand)]
    pub command: FolderCommand,
}

#[derive(Subcommand)]
pub enum FolderCommand {
    /// Move a folder: `sascli folder move /Public/source /Public/dest/newName`
    Move(MoveArgs),
}

#[derive(Args)]
pub struct MoveArgs {
    /// Source and destination paths (exactly two, whitespace separated)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Target name from the local rc file
    #[arg(short, long)]
    pub target: Option<String>,
}

pub fn run(args: FolderArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MoveOutput> {
    match args.command {
        FolderCommand::Move(move_args) => {
            let target = match &move_args.target {
                Some(name) => Some(config::require_target(name)?),
                None => None,
            };

            // Accept both quoted and unquoted path pairs from the shell.
            let paths = move_args.paths.join(" ");
            let output = folder::move_folder(&paths, target.as_ref())?;
            Ok((output, 0))
        }
    }
}
