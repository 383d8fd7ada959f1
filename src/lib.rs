// Library crate for the codepair mentoring server
// This file exposes the public API for integration tests

pub mod content;
pub mod registry;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use content::{CodeBlock, CodeBlockSummary, ContentRepository, InMemoryContentRepository};
pub use registry::{ConnectionId, JoinOutcome, LeaveOutcome, RoomRegistry};
pub use session::{
    ChatMessage, ClientEvent, ConnectionManager, InMemoryConnectionManager, InboundHandler, Role,
    ServerEvent, SessionGateway,
};
pub use shared::{AppError, AppState};
