//! Errors surfaced by provider construction and lookup.

use compact_str::CompactString;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Provider construction errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No constructor is registered under the requested id.
    #[error("provider '{0}' is not registered")]
    ProviderNotRegistered(CompactString),

    /// The native client constructor rejected the final parameters.
    ///
    /// The inner error is passed through as-is, so callers can still
    /// downcast it to the native client's own error type.
    #[error(transparent)]
    Construction(anyhow::Error),
}
