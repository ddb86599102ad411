pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::Client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to build http client: {cause}")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to send request: {cause}")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text: {cause}")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response: {cause}")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to serialize request: {cause}")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    /// Status code of a non-2xx response, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::GenericResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
