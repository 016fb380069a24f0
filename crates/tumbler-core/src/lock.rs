//! Combination lock state machine.
//!
//! A lock has a dial and a secret [`Combination`]. Turning the dial feeds
//! letters into a three-slot [`Window`]; an open attempt compares the window,
//! oldest letter first, against the secret.
//!
//! # State Machine
//!
//! ```text
//!  ┌──────┐  open() with window != secret     ┌────────┐
//!  │      │  lock()                           │        │
//!  │ Open │  lock_and_change_combination()    │ Closed │
//!  │      │──────────────────────────────────>│        │
//!  │      │<──────────────────────────────────│        │
//!  └──────┘  open() with window == secret     └────────┘
//! ```
//!
//! Dialing never changes state. A lock is created Open.
//!
//! # Guard Clearing
//!
//! Every failed open and every forced close resets the newest window slot to
//! the sentinel. Calling `open()` twice in a row without dialing can therefore
//! never succeed on the second call, and a lock closed right after being
//! opened does not reopen from the letters still in the window. Only the
//! newest slot is cleared; the two older letters stay and keep shifting.

use std::fmt;

use crate::{
    combination::{COMBINATION_LEN, Combination, Letter},
    error::LockError,
    window::Window,
};

/// Lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Lock is open.
    Open,
    /// Lock is closed.
    Closed,
}

/// Dial window of a lock: the last three letters set.
pub type DialWindow = Window<Letter, COMBINATION_LEN>;

/// Combination lock.
///
/// Pure state machine with no I/O. The lock is exclusively owned by whoever
/// drives it; there is no interior mutability.
#[derive(Clone)]
pub struct Lock {
    /// Combination that opens the lock
    secret: Combination,
    /// Current state
    state: LockState,
    /// Last three dial positions
    window: DialWindow,
}

impl Lock {
    /// Create an open lock with the given combination.
    ///
    /// # Errors
    /// Returns `InvalidCombination` unless `combination` is exactly three
    /// uppercase letters `A`-`Z`.
    pub fn new(combination: &str) -> Result<Self, LockError> {
        let secret = combination.parse()?;
        Ok(Self::with_combination(secret))
    }

    /// Create an open lock from an already-validated combination.
    pub fn with_combination(secret: Combination) -> Self {
        Self { secret, state: LockState::Open, window: DialWindow::new() }
    }

    /// Get current state
    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    /// True if the lock is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == LockState::Open
    }

    /// The dial window, oldest letter first.
    pub fn window(&self) -> &DialWindow {
        &self.window
    }

    /// Turn the dial to `position`.
    ///
    /// Accepted in any state. The window shifts by one and no state
    /// transition happens.
    ///
    /// # Errors
    /// Returns `InvalidPosition` if `position` is not an uppercase letter
    /// `A`-`Z`. The window is left untouched.
    pub fn set_position(&mut self, position: char) -> Result<(), LockError> {
        let letter = Letter::try_from(position)?;
        self.dial(letter);
        Ok(())
    }

    /// Turn the dial to an already-validated letter.
    pub fn dial(&mut self, letter: Letter) {
        self.window.push(letter);
    }

    /// Try to open the lock with the last three dial positions.
    ///
    /// On a match the lock is Open. Otherwise it is Closed and the newest
    /// window slot is cleared.
    ///
    /// # Returns
    /// The state after the attempt
    pub fn open(&mut self) -> LockState {
        if self.window_matches_secret() {
            if self.state == LockState::Closed {
                tracing::debug!("lock opened");
            }
            self.state = LockState::Open;
        } else {
            tracing::trace!(previous = ?self.state, "open attempt rejected");
            self.close_with_guard();
        }

        self.state
    }

    /// Close the lock without changing the combination.
    pub fn lock(&mut self) {
        self.close_with_guard();
    }

    /// Close the lock and, if it was open, install a new combination.
    ///
    /// On a closed lock the combination is kept and `combination` is ignored;
    /// the newest window slot is still cleared.
    ///
    /// # Errors
    /// Returns `InvalidCombination` if the lock is open and `combination` is
    /// not exactly three uppercase letters. The lock stays open and untouched.
    pub fn lock_and_change_combination(&mut self, combination: &str) -> Result<(), LockError> {
        if self.state == LockState::Open {
            self.secret = combination.parse()?;
            tracing::debug!("combination changed");
        }

        self.close_with_guard();
        Ok(())
    }

    fn window_matches_secret(&self) -> bool {
        self.window.iter().zip(self.secret.letters()).all(|(slot, letter)| slot == Some(letter))
    }

    fn close_with_guard(&mut self) {
        self.state = LockState::Closed;
        self.window.clear_newest();
    }
}

// An open lock's window holds the secret, so only the fill count is shown.
impl fmt::Debug for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots_filled = self.window.iter().filter(Option::is_some).count();
        f.debug_struct("Lock")
            .field("secret", &"<redacted>")
            .field("state", &self.state)
            .field("slots_filled", &slots_filled)
            .finish()
    }
}
