//! Error taxonomy shared by the grid model and the search engine.

/// Errors raised while configuring or running a search.
///
/// Both variants are fatal to the current run; nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A strategy, grid or coordinate was rejected at construction or
    /// configuration time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An internal contract was violated while updating the frontier.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl SearchError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}
