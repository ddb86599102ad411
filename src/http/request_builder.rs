use super::{
    client::Client,
    request::{HttpRequestBuilder, Method},
    response::{AsyncFrom, Response},
    Error,
};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_JSON: &str = "application/vnd.github+json";
const AGENT: &str = "data-updater";

pub trait RequestType {}
pub struct Get;
pub struct Put;

impl RequestType for Get {}
impl RequestType for Put {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            builder: HttpRequestBuilder::new(Method::Get, url),
        }
    }

    pub fn put(client: Client, url: impl Into<String>) -> RequestBuilder<Put> {
        RequestBuilder {
            client,
            _marker: std::marker::PhantomData,
            builder: HttpRequestBuilder::new(Method::Put, url),
        }
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    pub builder: HttpRequestBuilder,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    /// Sends the request and deserializes a 2xx json body.
    ///
    /// Non-2xx responses come back as [`Error::GenericResponseError`] carrying
    /// the status code and GitHub's `message`.
    pub async fn send<R>(self) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.client.send(self.builder).await?;

        Response::<R>::async_from(response).await?.collect()
    }

    pub fn json_content_headers(mut self) -> Self {
        self.builder
            .bearer_auth(self.client.token())
            .header(ACCEPT.as_str(), GITHUB_JSON)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT.as_str(), AGENT);

        self
    }
}

impl RequestBuilder<Put> {
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.builder.body(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        value: String,
    }

    #[tokio::test]
    async fn get_sends_github_headers() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let client = Client::new(server.url(), "test_token", None)?;

        let mock = server
            .mock("GET", "/thing")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "data-updater")
            .with_body(r#"{"value":"ok"}"#)
            .create_async()
            .await;

        let response: Echo = client.get("/thing").json_content_headers().send().await?;

        mock.assert_async().await;
        assert_eq!(response.value, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn put_sends_json_body() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let client = Client::new(format!("{}/", server.url()), "test_token", None)?;

        let mock = server
            .mock("PUT", "/thing")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "key": "value" })))
            .with_status(201)
            .with_body(r#"{"value":"created"}"#)
            .create_async()
            .await;

        let response: Echo = client
            .put("thing")
            .json_content_headers()
            .body(json!({ "key": "value" }))
            .send()
            .await?;

        mock.assert_async().await;
        assert_eq!(response.value, "created");

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_becomes_response_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let client = Client::new(server.url(), "test_token", None)?;

        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let result = client
            .get("/missing")
            .json_content_headers()
            .send::<Echo>()
            .await;

        mock.assert_async().await;

        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not Found");

        Ok(())
    }

    #[tokio::test]
    async fn unexpected_body_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let client = Client::new(server.url(), "test_token", None)?;

        let _mock = server
            .mock("GET", "/weird")
            .with_body("[1, 2, 3]")
            .create_async()
            .await;

        let result = client.get("/weird").send::<Echo>().await;

        assert!(matches!(result, Err(Error::ParseResponseError { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_is_a_send_error() -> Result<(), Box<dyn std::error::Error>> {
        let client = Client::new("http://127.0.0.1:1", "test_token", None)?;

        let result = client.get("/anything").send::<Echo>().await;

        assert!(matches!(result, Err(Error::SendRequestError { .. })));

        Ok(())
    }
}
