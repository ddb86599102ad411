use crate::http::Error;

use serde::{de::DeserializeOwned, Deserialize};

pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

/// GitHub reports failures as `{ "message": "...", "documentation_url": "..." }`.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

pub enum Response<T> {
    Success(T),
    Error(ErrorResponse),
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Error(response) => Err(Error::GenericResponseError {
                status: response.status,
                message: response.message,
            }),
        }
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Result<Self, Error>;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status();

        let text = value
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Ok(Response::Error(ErrorResponse {
                status: status.as_u16(),
                message: error_message(status, &text),
            }));
        }

        let payload =
            serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(Response::Success(payload))
    }
}

fn error_message(status: reqwest::StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ApiMessage>(text) {
        return body.message;
    }

    if !text.trim().is_empty() {
        return text.to_owned();
    }

    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn should_prefer_github_message_field() {
        let message = error_message(
            StatusCode::NOT_FOUND,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#,
        );

        assert_eq!(message, "Not Found");
    }

    #[test]
    fn should_fall_back_to_raw_text() {
        let message = error_message(StatusCode::BAD_GATEWAY, "upstream exploded");

        assert_eq!(message, "upstream exploded");
    }

    #[test]
    fn should_fall_back_to_reason_phrase_on_empty_body() {
        let message = error_message(StatusCode::CONFLICT, "");

        assert_eq!(message, "Conflict");
    }
}
