// Public API
pub use handlers::{get_code_block, list_code_blocks};
pub use models::{CodeBlock, CodeBlockSummary, Hint};
pub use repository::{ContentRepository, InMemoryContentRepository};
pub use seed::initial_code_blocks;

// Internal modules
mod handlers;
mod models;
mod repository;
mod seed;
