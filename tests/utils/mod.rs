#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use codepair::content::{initial_code_blocks, InMemoryContentRepository};
use codepair::registry::{ConnectionId, RoomRegistry};
use codepair::session::{ConnectionManager, InMemoryConnectionManager, InboundHandler, ServerEvent};
use codepair::shared::AppState;

/// Test harness wired like the real server, minus the socket transport
///
/// Clients talk to the gateway directly and observe broadcasts through
/// the same outbound channels a live connection would use.
pub struct TestHarness {
    pub state: AppState,
}

pub struct TestClient {
    pub id: ConnectionId,
    receiver: mpsc::UnboundedReceiver<String>,
}

impl TestHarness {
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(InMemoryContentRepository::new(initial_code_blocks())),
            Arc::new(RoomRegistry::new()),
            Arc::new(InMemoryConnectionManager::new()),
        );
        Self { state }
    }

    /// Establish a connection: mint an id and register its outbound channel
    pub async fn connect(&self) -> TestClient {
        let id = ConnectionId::new();
        let (sender, receiver) = mpsc::unbounded_channel();
        self.state.connections.add_connection(id, sender).await;
        TestClient { id, receiver }
    }

    pub async fn send_raw(&self, client: &TestClient, raw: &str) {
        self.state.gateway.handle_event(client.id, raw.to_string()).await;
    }

    pub async fn join(&self, client: &TestClient, room_id: &str) {
        let raw = serde_json::json!({ "event": "join-room", "data": room_id });
        self.send_raw(client, &raw.to_string()).await;
    }

    pub async fn send_code(&self, client: &TestClient, room_id: &str, code: &str) {
        let raw = serde_json::json!({
            "event": "code-change",
            "data": { "roomId": room_id, "code": code }
        });
        self.send_raw(client, &raw.to_string()).await;
    }

    pub async fn send_chat(
        &self,
        client: &TestClient,
        room_id: &str,
        message: &str,
        sender: &str,
        role: &str,
    ) {
        let raw = serde_json::json!({
            "event": "send-message",
            "data": { "roomId": room_id, "message": message, "sender": sender, "role": role }
        });
        self.send_raw(client, &raw.to_string()).await;
    }

    /// Transport-level drop: deregister delivery, then reconcile
    pub async fn disconnect(&self, client: &TestClient) {
        self.state.connections.remove_connection(client.id).await;
        self.state.gateway.handle_disconnect(client.id).await;
    }
}

impl TestClient {
    /// Drain everything queued so far, parsed as server events
    pub fn drain(&mut self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(raw) = self.receiver.try_recv() {
            events.push(serde_json::from_str(&raw).expect("server emitted invalid event JSON"));
        }
        events
    }
}
