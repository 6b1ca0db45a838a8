use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::error;

use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    // Opens the backing document eagerly; a failure here means the process
    // must not start serving.
    pub async fn new(config: &Configuration) -> LibraryResult<AppState> {
        let catalog = factory::create_catalog_service(config).await?;
        Ok(AppState {
            config: config.clone(),
            catalog: Arc::from(catalog),
        })
    }
}

// JSON error envelope returned by every handler. Validation, parsing and
// duplicate failures use {"error": ...}; missing records and routes use
// {"message": ...}. Internal detail never reaches the wire.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    pub(crate) fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": message }),
        }
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "message": message }),
        }
    }

    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": "Internal server error." }),
        }
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { message } => {
                ApiError::bad_request(message.as_str())
            }
            CommandError::DuplicateKey { message } => {
                ApiError::bad_request(message.as_str())
            }
            CommandError::NotFound { .. } => {
                ApiError::not_found("Book not found")
            }
            CommandError::Database { message }
            | CommandError::Serialization { message }
            | CommandError::Runtime { message } => {
                error!("request failed: {}", message);
                ApiError::internal()
            }
        }
    }
}

// The whole body is accumulated before this runs; axum's body limit bounds it.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::bad_request("Invalid JSON format"))
}
