mod builder;
pub mod github_client;
mod handler;
mod remote_file;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
pub use remote_file::RemoteFile;

use crate::http;
use async_trait::async_trait;
use thiserror::Error;

/// The two Contents API operations the updater needs.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Current blob sha of `file`, or `None` when the file does not exist.
    async fn file_sha(&self, file: &RemoteFile) -> Result<Option<String>, ContentError>;

    /// Creates `file` when it has no sha, otherwise replaces the blob with that sha.
    ///
    /// `content` must already be base64 encoded.
    async fn upsert_file(
        &self,
        file: &RemoteFile,
        message: &str,
        content: &str,
    ) -> Result<(), ContentError>;
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{message}")]
    Unauthorized { status: u16, message: String },
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error(transparent)]
    Http(http::Error),
}

impl From<http::Error> for ContentError {
    fn from(error: http::Error) -> Self {
        match error {
            http::Error::GenericResponseError { status, message } if status == 401 || status == 403 => {
                ContentError::Unauthorized { status, message }
            }
            http::Error::GenericResponseError { status, message } => {
                ContentError::Remote { status, message }
            }
            other => ContentError::Http(other),
        }
    }
}
