use crate::github::{
    builder::upsert_file_builder::UpsertFileBuilder, github_client::GithubClient, ContentError,
};

pub struct ContentsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: String,
}

impl<'a> ContentsHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        ContentsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
        }
    }

    /// Blob sha of the file, `None` if GitHub answers 404.
    pub async fn sha(&self) -> Result<Option<String>, ContentError> {
        self.client
            .get_file_sha(&self.owner, &self.repo, &self.path)
            .await
    }

    pub fn upsert(&self) -> UpsertFileBuilder<'a> {
        UpsertFileBuilder::new(self.client, &self.owner, &self.repo, &self.path)
    }
}
