mod request;
#[cfg(test)]
pub(crate) mod testing;

pub use request::{CommitResult, UpdateRequest};

use crate::{
    config::Config,
    github::{ContentError, ContentStore, RemoteFile},
};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde_json::Value;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Malformed(String),
    #[error("Failed to serialize data: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{0}")]
    Lookup(#[source] ContentError),
    #[error("{0}")]
    Write(#[source] ContentError),
}

/// Handler settings taken from [`Config`] at startup.
#[derive(Clone)]
pub struct Settings {
    pub admin_password: String,
    pub file_path: String,
    pub commit_message: String,
    /// Treat every failed sha lookup as "file missing" instead of only a 404.
    pub lenient_lookup: bool,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            admin_password: config.admin_password.to_owned(),
            file_path: config.file_path.to_owned(),
            commit_message: config.commit_message.to_owned(),
            lenient_lookup: config.lenient_lookup,
        }
    }
}

/// Authorizes update requests and commits their payload through a [`ContentStore`].
pub struct Updater {
    store: Arc<dyn ContentStore>,
    settings: Settings,
}

impl Updater {
    pub fn new(store: Arc<dyn ContentStore>, settings: Settings) -> Self {
        Updater { store, settings }
    }

    fn is_authorized(&self, request: &UpdateRequest) -> bool {
        match request.admin_password() {
            Some(password) if !password.is_empty() => {
                bool::from(password.as_bytes().ct_eq(self.settings.admin_password.as_bytes()))
            }
            _ => false,
        }
    }

    /// Runs one update. The password check happens before anything touches the
    /// store, and the sha lookup always completes before the write is issued.
    pub async fn update(&self, request: UpdateRequest) -> Result<CommitResult, UpdateError> {
        if !self.is_authorized(&request) {
            log::warn!("rejecting update with bad credentials");
            return Err(UpdateError::Unauthorized);
        }

        let fields = request
            .into_fields()
            .map_err(|err| UpdateError::Malformed(err.to_string()))?;

        let owner = fields.repo_owner.ok_or_else(|| missing("repoOwner"))?;
        let repo = fields.repo_name.ok_or_else(|| missing("repoName"))?;
        let data = fields.data.ok_or_else(|| missing("data"))?;

        let content = encode_content(&data)?;
        let file = RemoteFile::new(owner, repo, &self.settings.file_path);

        let sha = self.resolve_sha(&file).await?;
        let file = file.with_sha(sha);

        if file.is_new() {
            log::info!("creating {} in {}", file.path, file.full_name());
        } else {
            log::info!("updating {} in {}", file.path, file.full_name());
        }

        self.store
            .upsert_file(&file, &self.settings.commit_message, &content)
            .await
            .map_err(UpdateError::Write)?;

        Ok(CommitResult::updated(&file))
    }

    async fn resolve_sha(&self, file: &RemoteFile) -> Result<Option<String>, UpdateError> {
        match self.store.file_sha(file).await {
            Ok(sha) => Ok(sha),
            Err(err) if self.settings.lenient_lookup => {
                log::warn!(
                    "sha lookup for {} in {} failed, creating instead: {}",
                    file.path,
                    file.full_name(),
                    err
                );
                Ok(None)
            }
            Err(err) => Err(UpdateError::Lookup(err)),
        }
    }
}

/// Pretty prints `data` with two space indentation and base64 encodes it.
pub fn encode_content(data: &Value) -> Result<String, UpdateError> {
    let json = serde_json::to_string_pretty(data).map_err(UpdateError::Encode)?;

    Ok(BASE64_STANDARD.encode(json.as_bytes()))
}

fn missing(field: &str) -> UpdateError {
    UpdateError::Malformed(format!("missing field `{}`", field))
}
