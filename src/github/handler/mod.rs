pub mod contents_handler;
pub mod repository_handler;

use super::github_client::GithubClient;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }
}
