use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::models::{CodeBlock, CodeBlockSummary};
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all code blocks
///
/// GET /api/code-blocks
/// Returns title, description and starting code for every exercise
#[instrument(name = "list_code_blocks", skip(state))]
pub async fn list_code_blocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<CodeBlockSummary>>, AppError> {
    let blocks = state.content_repository.list().await?;
    info!(count = blocks.len(), "Code blocks listed");
    Ok(Json(blocks))
}

/// HTTP handler for fetching one code block with its solution and hints
///
/// GET /api/code-blocks/{title}
#[instrument(name = "get_code_block", skip(state))]
pub async fn get_code_block(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<CodeBlock>, AppError> {
    let block = state
        .content_repository
        .get_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound("Code block not found".to_string()))?;

    info!(title = %title, "Code block fetched");
    Ok(Json(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn test_app() -> Router {
        let app_state = AppStateBuilder::new().with_seeded_content().build();
        Router::new()
            .route(
                "/api/code-blocks",
                axum::routing::get(list_code_blocks),
            )
            .route(
                "/api/code-blocks/:title",
                axum::routing::get(get_code_block),
            )
            .with_state(app_state)
    }

    #[tokio::test]
    async fn test_list_code_blocks_returns_seeded_catalog() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/code-blocks")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summaries: Vec<CodeBlockSummary> = serde_json::from_slice(&body).unwrap();

        assert_eq!(summaries.len(), 7);
        assert_eq!(summaries[0].title, "Async Case");
        assert!(summaries.iter().all(|s| !s.initial_code.is_empty()));
    }

    #[tokio::test]
    async fn test_get_code_block_by_title() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/code-blocks/Array%20Methods")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let block: CodeBlock = serde_json::from_slice(&body).unwrap();

        assert_eq!(block.title, "Array Methods");
        assert!(block.solution.contains("reduce"));
        assert_eq!(block.hints.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_code_block_is_404() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/code-blocks/Nonexistent")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["message"], "Code block not found");
    }
}
