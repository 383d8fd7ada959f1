// Public API
pub use models::{ConnectionId, Room};
pub use registry::{JoinOutcome, LeaveOutcome, RoomRegistry};

// Internal modules
mod models;
mod registry;
