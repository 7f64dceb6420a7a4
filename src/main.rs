use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{folder, init, run, variable, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "sascli")]
#[command(version = VERSION)]
#[command(about = "CLI for SAS platform folder operations and project scaffolding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remote folder operations
    Folder(folder::FolderArgs),
    /// Execute a shell script with captured output
    Run(run::RunArgs),
    /// Scaffold an npm project in a folder
    Init(init::InitArgs),
    /// Resolve a variable through the layered lookup chain
    #[command(visible_alias = "var")]
    Variable(variable::VariableArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    let _ = output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
