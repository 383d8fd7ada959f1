// Public API
pub use connection_manager::{ConnectionManager, InMemoryConnectionManager};
pub use gateway::SessionGateway;
pub use handler::websocket_handler;
pub use messages::{ChatMessage, ClientEvent, Role, ServerEvent};
pub use router::BroadcastRouter;
pub use socket::InboundHandler;

// Internal modules
mod connection_manager;
mod gateway;
mod handler;
mod messages;
mod router;
mod socket;
