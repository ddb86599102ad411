use serde::Serialize;

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`.
///
/// Leaving `sha` out tells GitHub to create the file.
#[derive(Debug, Serialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UpsertFileRequest {
    pub fn new(message: impl Into<String>, content: impl Into<String>, sha: Option<String>) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            sha,
        }
    }
}
