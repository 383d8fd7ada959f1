use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Identifier for a single live socket
///
/// A connection id is minted when the socket is established and is never
/// reused across rooms; a reconnecting client gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A live pairing session keyed by exercise title
///
/// Rooms only exist while they have members; the registry deletes a room
/// as soon as its last member leaves or its mentor disconnects.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub members: HashSet<ConnectionId>,
    /// The first connection to join; at most one per room, never re-elected
    pub mentor: Option<ConnectionId>,
}

impl Room {
    /// Creates a new empty room for the given exercise id
    pub fn new(id: String) -> Self {
        Self {
            id,
            members: HashSet::new(),
            mentor: None,
        }
    }

    /// Get the current number of members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check if a connection is in this room
    pub fn has_member(&self, connection_id: ConnectionId) -> bool {
        self.members.contains(&connection_id)
    }

    /// Check if a connection is this room's mentor
    pub fn is_mentor(&self, connection_id: ConnectionId) -> bool {
        self.mentor == Some(connection_id)
    }
}
