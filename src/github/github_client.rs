use super::{BuilderExecutor, ContentError, ContentStore, RemoteFile};
use crate::{
    http::{
        self,
        request::{SerializeRequest, UpsertFileRequest},
        response::{FileShaResponse, UpsertFileResponse},
        Client,
    },
    percent_encoding::{encode_path, encode_segment},
};
use async_trait::async_trait;
use std::time::Duration;

const NOT_FOUND: u16 = 404;

pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    pub fn new(
        api_url: impl AsRef<str>,
        token: impl AsRef<str>,
        timeout: Option<Duration>,
    ) -> Result<Self, http::Error> {
        Ok(GithubClient {
            client: Client::new(api_url, token, timeout)?,
        })
    }

    pub(super) async fn get_file_sha(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<String>, ContentError> {
        let uri = contents_uri(owner, repo, path);

        let response = self
            .client
            .get(&uri)
            .json_content_headers()
            .send::<FileShaResponse>()
            .await;

        match response {
            Ok(file) => {
                log::debug!("{} found with sha {}", file.path, file.sha);
                Ok(Some(file.sha))
            }
            Err(err) if err.status() == Some(NOT_FOUND) => {
                log::debug!("{} not found in {}/{}", path, owner, repo);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub(super) async fn put_file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        request: UpsertFileRequest,
    ) -> Result<UpsertFileResponse, ContentError> {
        if request.sha.is_none() {
            log::debug!("creating new file");
        } else {
            log::debug!("updating file");
        }

        let uri = contents_uri(owner, repo, path);
        let body = request.into_body()?;

        let response = self
            .client
            .put(&uri)
            .json_content_headers()
            .body(body)
            .send::<UpsertFileResponse>()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl ContentStore for GithubClient {
    async fn file_sha(&self, file: &RemoteFile) -> Result<Option<String>, ContentError> {
        self.repo(&file.owner, &file.repo)
            .contents(&file.path)
            .sha()
            .await
    }

    async fn upsert_file(
        &self,
        file: &RemoteFile,
        message: &str,
        content: &str,
    ) -> Result<(), ContentError> {
        let response = self
            .repo(&file.owner, &file.repo)
            .contents(&file.path)
            .upsert()
            .message(message)
            .content(content)
            .sha(file.sha.clone())
            .execute()
            .await?;

        log::debug!(
            "{} is now blob {} in commit {}",
            response.content.path,
            response.content.sha,
            response.commit.sha
        );

        Ok(())
    }
}

fn contents_uri(owner: &str, repo: &str, path: &str) -> String {
    format!(
        "/repos/{}/{}/contents/{}",
        encode_segment(owner),
        encode_segment(repo),
        encode_path(path)
    )
}
