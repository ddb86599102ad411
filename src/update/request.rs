use crate::github::RemoteFile;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of an update call.
///
/// Only JSON syntax is checked up front. The password is read straight from
/// the raw document so that a body with badly typed fields is still answered
/// with 401 when the caller is not authorized.
#[derive(Debug)]
pub struct UpdateRequest {
    body: Value,
}

impl UpdateRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Value>(body).map(UpdateRequest::from)
    }

    /// `None` when the password is absent or not a string.
    pub fn admin_password(&self) -> Option<&str> {
        self.body.get("adminPassword").and_then(Value::as_str)
    }

    /// Types the remaining fields. Call only once the caller is authorized.
    pub fn into_fields(self) -> Result<UpdateFields, serde_json::Error> {
        serde_json::from_value(self.body)
    }
}

impl From<Value> for UpdateRequest {
    fn from(body: Value) -> Self {
        UpdateRequest { body }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFields {
    #[serde(default)]
    pub repo_owner: Option<String>,
    #[serde(default)]
    pub repo_name: Option<String>,
    /// `Some(Value::Null)` for an explicit `null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CommitResult {
    pub success: bool,
    pub message: String,
    pub repo: String,
}

impl CommitResult {
    pub fn updated(file: &RemoteFile) -> Self {
        CommitResult {
            success: true,
            message: format!("{} successfully updated in GitHub.", file.path),
            repo: file.full_name(),
        }
    }
}
