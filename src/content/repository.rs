use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

use super::models::{CodeBlock, CodeBlockSummary};
use crate::shared::AppError;

/// Trait for exercise content retrieval
///
/// Read-only at runtime; the coordination layer never writes here.
#[async_trait]
pub trait ContentRepository {
    /// List all exercises in catalog order, without solutions
    async fn list(&self) -> Result<Vec<CodeBlockSummary>, AppError>;

    /// Fetch a single exercise by its title
    async fn get_by_title(&self, title: &str) -> Result<Option<CodeBlock>, AppError>;
}

/// In-memory implementation of ContentRepository, seeded at startup
pub struct InMemoryContentRepository {
    blocks: Mutex<Vec<CodeBlock>>,
}

impl InMemoryContentRepository {
    /// Creates a repository holding the given exercises
    pub fn new(blocks: Vec<CodeBlock>) -> Self {
        Self {
            blocks: Mutex::new(blocks),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list(&self) -> Result<Vec<CodeBlockSummary>, AppError> {
        let blocks = self.blocks.lock().unwrap();
        debug!(count = blocks.len(), "Listing code blocks");
        Ok(blocks.iter().map(CodeBlock::summary).collect())
    }

    async fn get_by_title(&self, title: &str) -> Result<Option<CodeBlock>, AppError> {
        let blocks = self.blocks.lock().unwrap();
        let block = blocks.iter().find(|block| block.title == title).cloned();
        match &block {
            Some(_) => debug!(title = %title, "Code block found"),
            None => debug!(title = %title, "Code block not found"),
        }
        Ok(block)
    }
}
