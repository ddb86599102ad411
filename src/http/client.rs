use super::{
    request::HttpRequestBuilder,
    request_builder::{Get, InitBuilder, Put, RequestBuilder},
    Error,
};
use reqwest::header::{HeaderName, HeaderValue};
use std::{sync::Arc, time::Duration};

/// Authenticated client for a single REST API base url.
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: Arc<str>,
    token: Arc<str>,
}

impl Client {
    pub fn new(
        base_url: impl AsRef<str>,
        token: impl AsRef<str>,
        timeout: Option<Duration>,
    ) -> Result<Client, Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(Client {
            inner,
            base_url: base_url.as_ref().trim_end_matches('/').into(),
            token: token.as_ref().into(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Resolves a path such as `/repos/a/b` against the base url.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), self.url(path))
    }

    pub fn put(&self, path: &str) -> RequestBuilder<Put> {
        InitBuilder::put(self.clone(), self.url(path))
    }

    pub(super) async fn send(&self, request: HttpRequestBuilder) -> Result<reqwest::Response, Error> {
        let HttpRequestBuilder {
            method,
            url,
            headers,
            bearer,
            body,
        } = request;

        let mut builder = self.inner.request(method.into(), &url);

        for (key, value) in headers {
            match (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => builder = builder.header(name, value),
                _ => log::warn!("skipping invalid header {}", key),
            }
        }

        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|cause| Error::SendRequestError { cause })?;

        log::debug!("{:?} {} -> {}", method, url, response.status());

        Ok(response)
    }
}
