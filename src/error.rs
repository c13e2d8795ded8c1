use thiserror::Error;

/// Unified error type for tagmaker operations
#[derive(Error, Debug)]
pub enum TagmakerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Error fetching from remote: {0}")]
    Fetch(String),

    #[error("Error checking out branch: {0}")]
    Checkout(String),

    #[error("Error creating tag: {0}")]
    Tag(String),

    #[error("Error pushing tag to remote: {0}")]
    Push(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagmaker
pub type Result<T> = std::result::Result<T, TagmakerError>;

impl TagmakerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagmakerError::Config(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        TagmakerError::Branch(msg.into())
    }

    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        TagmakerError::Fetch(msg.into())
    }

    /// Create a checkout error with context
    pub fn checkout(msg: impl Into<String>) -> Self {
        TagmakerError::Checkout(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TagmakerError::Tag(msg.into())
    }

    /// Create a push error with context
    pub fn push(msg: impl Into<String>) -> Self {
        TagmakerError::Push(msg.into())
    }
}
