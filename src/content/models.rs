use serde::{Deserialize, Serialize};

/// A worked hint attached to an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hint {
    pub text: String,
    pub code: String,
}

/// An exercise definition, keyed by its unique title
///
/// The title doubles as the room id for live sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    pub title: String,
    pub description: String,
    pub initial_code: String,
    pub solution: String,
    pub hints: Vec<Hint>,
}

/// Listing projection: everything a lobby needs, without the solution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlockSummary {
    pub title: String,
    pub description: String,
    pub initial_code: String,
}

impl CodeBlock {
    /// Project this exercise down to its listing form
    pub fn summary(&self) -> CodeBlockSummary {
        CodeBlockSummary {
            title: self.title.clone(),
            description: self.description.clone(),
            initial_code: self.initial_code.clone(),
        }
    }
}
