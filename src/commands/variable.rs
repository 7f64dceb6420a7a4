use clap::Args;
use serde::Serialize;

use sascli::config;
use sascli::variables::{self, VariableSource};

use super::CmdResult;

#[derive(Args)]
pub struct VariableArgs {
    /// Variable name to resolve
    pub name: String,

    /// Target name from the local rc file
    #[arg(short, long)]
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableOutput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<VariableSource>,
}

pub fn run(args: VariableArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<VariableOutput> {
    let target = match &args.target {
        Some(name) => Some(config::require_target(name)?),
        None => None,
    };

    // Absence is not an error: the output simply carries no value.
    let resolved = variables::get_variable(&args.name, target.as_ref())?;
    let (value, source) = match resolved {
        Some(r) => (Some(r.value), Some(r.source)),
        None => (None, None),
    };

    Ok((
        VariableOutput {
            name: args.name,
            value,
            source,
        },
        0,
    ))
}
