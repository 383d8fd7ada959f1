use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::ConnectionId;

/// Participant role within a room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Student,
}

/// Chat message constructed server-side at emission time
///
/// `sender_id` carries the originating connection so clients can tell
/// their own messages apart by identity instead of by the display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub message: String,
    pub sender: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
    pub sender_id: ConnectionId,
}

/// Events accepted from clients
///
/// The `event`/`data` envelope and the kebab-case event names are the
/// wire contract shared with the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Join the room named by the exercise title
    JoinRoom(String),

    /// Full replacement of the shared editor buffer
    CodeChange {
        #[serde(rename = "roomId")]
        room_id: String,
        code: String,
    },

    /// Chat message; the server assigns the timestamp
    SendMessage {
        #[serde(rename = "roomId")]
        room_id: String,
        message: String,
        sender: String,
        role: Role,
    },
}

/// Events emitted to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Direct reply to the joining connection only
    RoleAssigned {
        #[serde(rename = "isMentor")]
        is_mentor: bool,
    },

    /// Room-wide presence count after a membership change
    UserCount(usize),

    /// Full code text, room-wide minus the sender
    CodeUpdate(String),

    /// Room-wide including the sender
    ReceiveMessage(ChatMessage),

    /// Room-wide; the room is deleted immediately after
    MentorLeft,
}
