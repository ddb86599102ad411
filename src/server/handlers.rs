use super::{error::ApiError, AppState};
use crate::update::{CommitResult, UpdateRequest};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

pub async fn update_data(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CommitResult>, ApiError> {
    let request = UpdateRequest::from_slice(&body?)?;

    let result = state.updater().update(request).await?;

    log::info!("{}: {}", result.repo, result.message);

    Ok(Json(result))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
