//! Brute-force searcher.
//!
//! The searcher learns nothing from the lock except whether it is open. It
//! walks [`Candidates`] in order and, for each one:
//!
//! 1. forces the lock closed,
//! 2. dials the three letters,
//! 3. counts the attempt,
//! 4. tries to open and checks the result.
//!
//! Closing first leaves a window whose newest slot is cleared, and the three
//! dialed letters then push every stale slot out. The window at the open
//! attempt is therefore exactly the candidate, so the search reaches the
//! secret after `rank(secret)` attempts and never more than 26^3.

use tumbler_core::{Combination, Lock};

use crate::{candidates::Candidates, error::SearchError};

/// Attacker that recovers a lock's combination by exhaustive search.
///
/// Holds the lock mutably for its whole lifetime.
#[derive(Debug)]
pub struct Searcher<'a> {
    /// Lock under attack
    lock: &'a mut Lock,
    /// Attempts made by the last search, `None` before the first
    attempts: Option<u64>,
}

impl<'a> Searcher<'a> {
    /// Create a searcher for `lock`.
    pub fn new(lock: &'a mut Lock) -> Self {
        Self { lock, attempts: None }
    }

    /// Create a searcher from an optional lock.
    ///
    /// # Errors
    /// Returns `MissingLock` if `lock` is `None`.
    pub fn try_new(lock: Option<&'a mut Lock>) -> Result<Self, SearchError> {
        lock.map(Self::new).ok_or(SearchError::MissingLock)
    }

    /// Number of attempts made so far.
    ///
    /// `None` until [`Self::find_combination`] has been called.
    #[must_use]
    pub fn attempts(&self) -> Option<u64> {
        self.attempts
    }

    /// The lock under attack.
    pub fn lock(&self) -> &Lock {
        self.lock
    }

    /// Give the lock back.
    pub fn into_lock(self) -> &'a mut Lock {
        self.lock
    }

    /// Search for the combination.
    ///
    /// Resets the attempt counter, then tries every candidate in
    /// lexicographic order until one opens the lock. The lock is left open on
    /// success.
    ///
    /// # Returns
    /// `Some(combination)` for the first candidate that opened the lock,
    /// `None` if none did.
    ///
    /// # Errors
    /// Lock errors propagate unchanged; the search does not retry.
    pub fn find_combination(&mut self) -> Result<Option<Combination>, SearchError> {
        let _span = tracing::info_span!("find_combination").entered();
        tracing::debug!(space = Combination::SPACE, "starting exhaustive search");

        let attempts = self.attempts.insert(0);

        for candidate in Candidates::new() {
            self.lock.lock();
            for letter in candidate.letters() {
                self.lock.set_position(letter.as_char())?;
            }

            *attempts += 1;
            self.lock.open();

            if self.lock.is_open() {
                tracing::info!(combination = %candidate, attempts = *attempts, "lock opened");
                return Ok(Some(candidate));
            }
        }

        tracing::warn!(attempts = *attempts, "no candidate opened the lock");
        Ok(None)
    }
}
