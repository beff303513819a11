mod shecodes;

pub use shecodes::ShecodesClient;

use lexi_core::types::Definition;

/// Dictionary lookup provider interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch the definition of a single word
    async fn define(&self, word: &str) -> Result<Definition, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response: {0}")]
    Malformed(String),
}
