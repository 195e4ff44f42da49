//! Chat errors.

use crate::ChatMode;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a chat call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Prompt construction failed.
    #[error(transparent)]
    Prompt(#[from] prompt::Error),

    /// The model call failed.
    #[error(transparent)]
    Model(anyhow::Error),

    /// The service does not handle this mode.
    #[error("chat mode '{0}' is not implemented")]
    NotImplemented(ChatMode),
}
