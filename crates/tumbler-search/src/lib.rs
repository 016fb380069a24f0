//! Brute-force attack on a tumbler lock.
//!
//! A [`Searcher`] borrows a [`tumbler_core::Lock`] and recovers its
//! combination by trying every candidate in lexicographic order, counting
//! attempts as it goes.
//!
//! # Components
//!
//! - [`Searcher`]: Drives the lock through the candidate space
//! - [`Candidates`]: Lexicographic enumeration of all 26^3 combinations
//! - [`SearchError`]: Search error types

#![forbid(unsafe_code)]

mod candidates;
mod error;
mod searcher;

pub use candidates::Candidates;
pub use error::SearchError;
pub use searcher::Searcher;
