use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::registry::ConnectionId;
use crate::shared::AppState;

use super::socket::Connection;

/// WebSocket endpoint for the live session
///
/// GET /ws - joins happen afterwards via the join-room event, so the
/// upgrade itself never rejects.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(socket: axum::extract::ws::WebSocket, app_state: AppState) {
    let connection_id = ConnectionId::new();
    info!(
        connection_id = %connection_id,
        "WebSocket connection established"
    );

    // Create the outbound channel (app -> client) and register it so
    // broadcasts can reach this socket
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();
    app_state
        .connections
        .add_connection(connection_id, outbound_sender)
        .await;

    let connection = Connection::new(
        connection_id,
        Box::new(socket),
        outbound_receiver,
        app_state.gateway.clone(),
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(
                connection_id = %connection_id,
                "WebSocket connection closed cleanly"
            );
        }
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                error = ?e,
                "WebSocket connection error"
            );
        }
    }

    // Cleanup: deregister delivery first so reconciliation broadcasts
    // never target the dead socket
    app_state
        .connections
        .remove_connection(connection_id)
        .await;
    app_state.gateway.handle_disconnect(connection_id).await;
}
