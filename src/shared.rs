use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::content::ContentRepository;
use crate::registry::RoomRegistry;
use crate::session::{ConnectionManager, SessionGateway};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub content_repository: Arc<dyn ContentRepository + Send + Sync>,
    pub registry: Arc<RoomRegistry>,
    pub connections: Arc<dyn ConnectionManager>,
    pub gateway: Arc<SessionGateway>,
}

impl AppState {
    pub fn new(
        content_repository: Arc<dyn ContentRepository + Send + Sync>,
        registry: Arc<RoomRegistry>,
        connections: Arc<dyn ConnectionManager>,
    ) -> Self {
        let gateway = Arc::new(SessionGateway::new(
            Arc::clone(&registry),
            Arc::clone(&connections),
        ));
        Self {
            content_repository,
            registry,
            connections,
            gateway,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // REST errors use a `message` body, matching the content API
        // contract consumed by the lobby
        let body = Json(json!({
            "message": error_message
        }));

        (status, body).into_response()
    }
}
