pub type CmdResult<T> = sascli::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod folder;
pub mod init;
pub mod run;
pub mod variable;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (sascli::Result<serde_json::Value>, i32) {
    crate::tty::status("sascli is working...");

    match command {
        // Commands without global context
        crate::Commands::Init(args) => dispatch!(args, init),

        // Commands with global context
        crate::Commands::Folder(args) => dispatch!(args, global, folder),
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::Variable(args) => dispatch!(args, global, variable),
    }
}
