//! Thin client over the SAS platform folders API.
//!
//! The CLI does not model the platform's resource types; it sends the
//! request and hands back the response body as JSON.

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};

pub struct FolderApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl FolderApiClient {
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Move a folder under a new parent, renaming it to `target_name`.
    pub fn move_folder(
        &self,
        source_folder: &str,
        target_folder: &str,
        target_name: &str,
    ) -> Result<Value> {
        let url = format!("{}/folders/folders/move", self.base_url);
        let body = json!({
            "sourceFolder": source_folder,
            "targetFolder": target_folder,
            "name": target_name,
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| Error::api_request_failed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::api_request_failed(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::folder_move_failed(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
