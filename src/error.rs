//! Error taxonomy for pagination construction and session operations.

use thiserror::Error;

use crate::session::SessionState;

/// Errors surfaced by pagination construction and session operations.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Construction-time misconfiguration: empty page set, mixed page kinds,
    /// wrong symbol count, zero timeout, out-of-range start index.
    #[error("invalid pagination configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation was called in a session state that does not allow it.
    #[error("operation not allowed in session state {state:?}")]
    InvalidState {
        /// The state the session was in when the call was made.
        state: SessionState,
    },

    /// A render was requested for an index outside the page set.
    #[error("page index {index} out of range for {len} pages")]
    PageOutOfRange { index: usize, len: usize },

    /// The transport failed to deliver a send or an edit.
    #[error("transport error: {0}")]
    Transport(anyhow::Error),
}
