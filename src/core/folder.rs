//! Remote folder operations.

use crate::core::adapter::FolderApiClient;
use crate::core::config::Target;
use crate::core::variables;
use crate::error::{Error, Result};
use serde::Serialize;

pub const MOVE_USAGE: &str = "sascli folder move /Public/sourceFolder /Public/targetFolder";

/// Environment/config variable naming the platform server URL.
pub const SERVER_URL_VAR: &str = "SAS_SERVER_URL";
/// Environment/config variable naming the access token.
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePaths {
    pub source_folder: String,
    pub target_folder: String,
    pub target_name: String,
}

/// Split a `<source> <destination>` path pair.
///
/// The destination's last segment becomes the new folder name; the rest is
/// the destination directory. Anything other than exactly two paths is a
/// validation error and no API call is made.
pub fn split_move_paths(paths: &str) -> Result<MovePaths> {
    let tokens: Vec<&str> = paths.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(
            Error::validation_missing_argument(vec!["paths".to_string()])
                .with_hint(format!("Command example: {}", MOVE_USAGE)),
        );
    }
    if tokens.len() != 2 {
        return Err(Error::validation_invalid_argument(
            "paths",
            format!("Expected exactly two paths, got {}", tokens.len()),
            None,
            None,
        )
        .with_hint(format!("Command example: {}", MOVE_USAGE)));
    }

    let source_folder = tokens[0].to_string();
    let mut segments: Vec<&str> = tokens[1].split('/').collect();
    let target_name = segments.pop().unwrap_or_default().to_string();
    let target_folder = segments.join("/");

    Ok(MovePaths {
        source_folder,
        target_folder,
        target_name,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutput {
    pub source_folder: String,
    pub target_folder: String,
    pub target_name: String,
    pub message: String,
}

/// Move a remote folder described by a two-path argument string.
pub fn move_folder(paths: &str, target: Option<&Target>) -> Result<MoveOutput> {
    let parsed = split_move_paths(paths)?;
    let client = client_for(target)?;

    log_status!(
        "folder",
        "Moving '{}' to '{}/{}'",
        parsed.source_folder,
        parsed.target_folder,
        parsed.target_name
    );

    client.move_folder(
        &parsed.source_folder,
        &parsed.target_folder,
        &parsed.target_name,
    )?;

    let message = format!(
        "Folder successfully moved from '{}' to '{}/{}'.",
        parsed.source_folder, parsed.target_folder, parsed.target_name
    );

    Ok(MoveOutput {
        source_folder: parsed.source_folder,
        target_folder: parsed.target_folder,
        target_name: parsed.target_name,
        message,
    })
}

fn client_for(target: Option<&Target>) -> Result<FolderApiClient> {
    let server_url = match variables::get_variable(SERVER_URL_VAR, target)? {
        Some(resolved) => Some(resolved.value),
        None => target.and_then(|t| t.server_url.clone()),
    };
    let server_url = server_url.ok_or_else(|| {
        Error::config_invalid_value("serverUrl", None, "No server URL configured").with_hint(
            format!(
                "Set {} or add serverUrl to the target in your local rc file",
                SERVER_URL_VAR
            ),
        )
    })?;

    let access_token = variables::get_variable(ACCESS_TOKEN_VAR, target)?.map(|r| r.value);

    Ok(FolderApiClient::new(&server_url, access_token))
}
