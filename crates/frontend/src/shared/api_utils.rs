//! API utilities for frontend-backend communication
//!
//! Every authenticated call carries `Authorization: Bearer <token>` from
//! localStorage. Non-2xx responses are turned into [`ApiError::Status`] with
//! the server's `detail` message when one was sent.

use contracts::domain::common::{AggregateRoot, ApiErrorBody, EntityId};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::api_url;
use crate::system::auth::storage;

pub const NETWORK_ERROR_MESSAGE: &str = "ネットワークエラーが発生しました";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("failed to encode or decode body: {0}")]
    Parse(String),
}

impl ApiError {
    /// Message shown to the user: the server detail when present, otherwise
    /// the caller's fallback. Transport failures always get the generic
    /// network message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

fn auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder.header("Authorization", &auth_header()?))
}

fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn without_body(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder.build().map_err(|e| ApiError::Network(e.to_string()))
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message());
    Err(ApiError::Status { status, detail })
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// GET with bearer token
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = without_body(authorized(Request::get(&api_url(path)))?)?;
    read_json(send(request).await?).await
}

/// POST with bearer token and JSON body
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_json(authorized(Request::post(&api_url(path)))?, body)?;
    read_json(send(request).await?).await
}

/// PUT with bearer token and JSON body
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_json(authorized(Request::put(&api_url(path)))?, body)?;
    read_json(send(request).await?).await
}

/// DELETE with bearer token; the body of the response is ignored
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = without_body(authorized(Request::delete(&api_url(path)))?)?;
    send(request).await.map(|_| ())
}

/// POST with bearer token, returning the raw response bytes (PDF downloads).
pub async fn post_for_bytes<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    let request = with_json(authorized(Request::post(&api_url(path)))?, body)?;
    send(request)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// POST without credentials (login, register, password reset).
pub async fn post_public<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    let request = with_json(Request::post(&api_url(path)), body)?;
    send(request).await
}

pub async fn post_public_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    read_json(post_public(path, body).await?).await
}

// Resource helpers shared by the per-aggregate api modules.

pub async fn fetch_all<T: AggregateRoot + DeserializeOwned>() -> Result<Vec<T>, ApiError> {
    get_json(T::collection_path()).await
}

pub async fn create<T, D>(dto: &D) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
    D: Serialize,
{
    post_json(T::collection_path(), dto).await
}

pub async fn update<T, D>(id: EntityId, dto: &D) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
    D: Serialize,
{
    put_json(&T::item_path(id), dto).await
}

pub async fn remove<T: AggregateRoot>(id: EntityId) -> Result<(), ApiError> {
    delete(&T::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_fallback() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("このメールアドレスは既に登録されています".into()),
        };
        assert_eq!(
            err.user_message("登録に失敗しました"),
            "このメールアドレスは既に登録されています"
        );
    }

    #[test]
    fn test_fallbacks() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("保存に失敗しました"), "保存に失敗しました");
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".into()).user_message("保存に失敗しました"),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::Parse("eof".into()).user_message("保存に失敗しました"),
            "保存に失敗しました"
        );
    }

    #[test]
    fn test_unauthorized_is_not_special() {
        let err = ApiError::Status {
            status: 401,
            detail: Some("Could not validate credentials".into()),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.user_message("x"), "Could not validate credentials");
        assert!(ApiError::Status { status: 404, detail: None }.is_not_found());
    }
}
