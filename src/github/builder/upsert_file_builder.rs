use super::BuilderExecutor;
use crate::{
    github::{github_client::GithubClient, ContentError},
    http::{request::UpsertFileRequest, response::UpsertFileResponse},
};

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: String,
    commit_message: String,
    content: String,
    sha: Option<String>,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        UpsertFileBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            commit_message: String::new(),
            content: String::new(),
            sha: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Base64 encoded file content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn sha(mut self, sha: Option<String>) -> Self {
        self.sha = sha;
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = UpsertFileResponse;

    async fn execute(self) -> Result<Self::Output, ContentError> {
        let request = UpsertFileRequest::new(self.commit_message, self.content, self.sha);

        self.client
            .put_file_contents(&self.owner, &self.repo, &self.path, request)
            .await
    }
}
