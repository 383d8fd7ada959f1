use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::registry::{ConnectionId, LeaveOutcome, RoomRegistry};

use super::connection_manager::ConnectionManager;
use super::messages::{ChatMessage, ClientEvent, Role, ServerEvent};
use super::router::BroadcastRouter;
use super::socket::InboundHandler;

/// Per-connection event dispatcher
///
/// Receives inbound events, mutates the registry, and triggers the
/// matching broadcasts. A failure while handling one connection's event
/// is logged and dropped; it never reaches other connections.
pub struct SessionGateway {
    registry: Arc<RoomRegistry>,
    router: BroadcastRouter,
}

impl SessionGateway {
    pub fn new(registry: Arc<RoomRegistry>, connections: Arc<dyn ConnectionManager>) -> Self {
        let router = BroadcastRouter::new(Arc::clone(&registry), connections);
        Self { registry, router }
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    async fn handle_join(&self, connection_id: ConnectionId, room_id: String) {
        let outcome = self.registry.join(&room_id, connection_id);

        self.router
            .to_connection(
                connection_id,
                &ServerEvent::RoleAssigned {
                    is_mentor: outcome.is_mentor,
                },
            )
            .await;
        self.router
            .to_room(&room_id, &ServerEvent::UserCount(outcome.member_count))
            .await;
    }

    async fn handle_code_change(&self, connection_id: ConnectionId, room_id: String, code: String) {
        // Full-buffer replacement, last writer wins; the sender already
        // has the text, so it is excluded
        self.router
            .to_room_except(&room_id, connection_id, &ServerEvent::CodeUpdate(code))
            .await;
    }

    async fn handle_send_message(
        &self,
        connection_id: ConnectionId,
        room_id: String,
        message: String,
        sender: String,
        role: Role,
    ) {
        debug!(
            room_id = %room_id,
            sender = %sender,
            "Relaying chat message"
        );
        let chat = ChatMessage {
            message,
            sender,
            role,
            timestamp: Utc::now(),
            sender_id: connection_id,
        };
        self.router
            .to_room(&room_id, &ServerEvent::ReceiveMessage(chat))
            .await;
    }

    /// Reconcile registry state after a connection drop
    pub async fn handle_disconnect(&self, connection_id: ConnectionId) {
        match self.registry.leave(connection_id) {
            LeaveOutcome::NotFound => {
                debug!(
                    connection_id = %connection_id,
                    "Disconnect for connection with no room"
                );
            }
            LeaveOutcome::MentorLeft { room_id, remaining } => {
                info!(
                    room_id = %room_id,
                    remaining = remaining.len(),
                    "Mentor disconnected, notifying remaining members"
                );
                self.router
                    .to_members(&remaining, &ServerEvent::MentorLeft)
                    .await;
            }
            LeaveOutcome::StudentLeft {
                room_id,
                remaining_count,
            } => {
                self.router
                    .to_room(&room_id, &ServerEvent::UserCount(remaining_count))
                    .await;
            }
            LeaveOutcome::RoomEmptied { room_id } => {
                debug!(room_id = %room_id, "Last member disconnected, room deleted");
            }
        }
    }
}

#[async_trait]
impl InboundHandler for SessionGateway {
    async fn handle_event(&self, connection_id: ConnectionId, message: String) {
        let event = match serde_json::from_str::<ClientEvent>(&message) {
            Ok(event) => event,
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Failed to parse client event"
                );
                return;
            }
        };

        match event {
            ClientEvent::JoinRoom(room_id) => {
                self.handle_join(connection_id, room_id).await;
            }
            ClientEvent::CodeChange { room_id, code } => {
                self.handle_code_change(connection_id, room_id, code).await;
            }
            ClientEvent::SendMessage {
                room_id,
                message,
                sender,
                role,
            } => {
                self.handle_send_message(connection_id, room_id, message, sender, role)
                    .await;
            }
        }
    }
}
