//! Search error types.

use thiserror::Error;
use tumbler_core::LockError;

/// Errors from the searcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Searcher was constructed without a lock to attack.
    #[error("searcher requires a lock")]
    MissingLock,

    /// Lock rejected an input produced by the search. Never retried.
    #[error(transparent)]
    Lock(#[from] LockError),
}
