use axum::{routing::get, Router};
use codepair::content::{self, initial_code_blocks, InMemoryContentRepository};
use codepair::registry::RoomRegistry;
use codepair::session::{self, InMemoryConnectionManager};
use codepair::shared::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codepair=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting codepair mentoring server");

    // Exercise catalog is seeded at startup and read-only afterwards
    let content_repository = Arc::new(InMemoryContentRepository::new(initial_code_blocks()));
    let app_state = AppState::new(
        content_repository,
        Arc::new(RoomRegistry::new()),
        Arc::new(InMemoryConnectionManager::new()),
    );

    let app = Router::new()
        .route("/api/code-blocks", get(content::list_code_blocks))
        .route("/api/code-blocks/:title", get(content::get_code_block))
        .route("/ws", get(session::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://localhost:{port}");
    axum::serve(listener, app).await.unwrap();
}
