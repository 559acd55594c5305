use thiserror::Error;

// =============================================================================
// Errors surfaced by the demonstration programs
// =============================================================================

/// The patterns themselves never fail; only the plumbing around them can.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demonstration output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;
