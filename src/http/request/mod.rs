mod upsert_file_request;

pub use upsert_file_request::UpsertFileRequest;

use super::Error;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

#[derive(Debug)]
pub struct HttpRequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequestBuilder {
            method,
            url: url.into(),
            headers: HashMap::new(),
            bearer: None,
            body: None,
        }
    }

    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn bearer_auth(&mut self, token: impl Into<String>) -> &mut Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn body(&mut self, body: serde_json::Value) -> &mut Self {
        self.body = Some(body);
        self
    }
}

pub trait SerializeRequest {
    fn into_body(self) -> Result<serde_json::Value, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_value(&self).map_err(|cause| Error::SerializeRequestError { cause })
    }
}

impl SerializeRequest for UpsertFileRequest {}
