#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no card at index {index} (deck has {len} cards)")]
    CardNotFound { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DeckError>;
