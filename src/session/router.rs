use std::sync::Arc;
use tracing::warn;

use crate::registry::{ConnectionId, RoomRegistry};

use super::connection_manager::ConnectionManager;
use super::messages::ServerEvent;

/// Fans out server events to the right audience within a room
///
/// Membership comes from the registry, delivery goes through the
/// connection manager. Per-room ordering equals server arrival order;
/// there is no cross-room ordering guarantee and no acknowledgment.
#[derive(Clone)]
pub struct BroadcastRouter {
    registry: Arc<RoomRegistry>,
    connections: Arc<dyn ConnectionManager>,
}

impl BroadcastRouter {
    pub fn new(registry: Arc<RoomRegistry>, connections: Arc<dyn ConnectionManager>) -> Self {
        Self {
            registry,
            connections,
        }
    }

    fn encode(event: &ServerEvent) -> Option<String> {
        match serde_json::to_string(event) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(error = %e, "Failed to serialize server event");
                None
            }
        }
    }

    /// Send to a single connection
    pub async fn to_connection(&self, connection_id: ConnectionId, event: &ServerEvent) {
        if let Some(json) = Self::encode(event) {
            self.connections
                .send_to_connection(connection_id, &json)
                .await;
        }
    }

    /// Send to every current member of a room
    pub async fn to_room(&self, room_id: &str, event: &ServerEvent) {
        let members = self.registry.members(room_id);
        if let Some(json) = Self::encode(event) {
            self.connections.send_to_connections(&members, &json).await;
        }
    }

    /// Send to every current member of a room except one
    pub async fn to_room_except(
        &self,
        room_id: &str,
        excluded: ConnectionId,
        event: &ServerEvent,
    ) {
        let members: Vec<ConnectionId> = self
            .registry
            .members(room_id)
            .into_iter()
            .filter(|member| *member != excluded)
            .collect();
        if let Some(json) = Self::encode(event) {
            self.connections.send_to_connections(&members, &json).await;
        }
    }

    /// Send to an explicit member list
    ///
    /// Used after a teardown, when the room is already gone from the
    /// registry but its former members still need the notification.
    pub async fn to_members(&self, members: &[ConnectionId], event: &ServerEvent) {
        if let Some(json) = Self::encode(event) {
            self.connections.send_to_connections(members, &json).await;
        }
    }
}
