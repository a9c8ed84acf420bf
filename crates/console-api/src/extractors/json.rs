//! `ApiJson` extractor: a JSON body whose rejection uses the API error shape.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use console_core::error::{AppError, DEFAULT_ERROR_MESSAGE, ErrorKind};

use crate::error::ApiError;

/// JSON request body. Malformed or mistyped bodies are reported as a
/// generic 400 with the parser's reason in `detailedMessage`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::with_source(
                ErrorKind::Validation,
                DEFAULT_ERROR_MESSAGE,
                rejection,
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    async fn extract(req: Request) -> Result<ApiJson<Named>, ApiError> {
        <ApiJson<Named> as FromRequest<()>>::from_request(req, &()).await
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ApiJson(body) = extract(json_request(r#"{"name":"jane"}"#)).await.unwrap();
        assert_eq!(body.name, "jane");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let err = extract(json_request("{not json")).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.0.message, DEFAULT_ERROR_MESSAGE);
        assert!(err.0.detailed_message().len() > DEFAULT_ERROR_MESSAGE.len());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"jane"}"#))
            .unwrap();
        let err = extract(req).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
