//! Fixed-capacity rolling window.
//!
//! [`Window`] remembers the last `N` values pushed into it. Each push evicts
//! the oldest slot. A slot that was never written, or was cleared, holds the
//! sentinel (`None`).
//!
//! The slots live in a ring; `head` always indexes the oldest slot, so the
//! newest is the one just behind it:
//!
//! ```text
//!   push(A), push(B), push(C), push(D)  with N = 3
//!
//!   slots: [ D, B, C ]
//!               ^ head (oldest)
//!   logical order: B, C, D
//! ```

/// Ring buffer of the last `N` values, oldest evicted first.
#[derive(Debug, Clone)]
pub struct Window<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
}

impl<T: Copy, const N: usize> Window<T, N> {
    /// Create a window with every slot set to the sentinel.
    pub fn new() -> Self {
        const { assert!(N > 0, "window capacity must be non-zero") };
        Self { slots: [None; N], head: 0 }
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Append `value` as the newest slot, evicting the oldest.
    pub fn push(&mut self, value: T) {
        self.slots[self.head] = Some(value);
        self.head = (self.head + 1) % N;
    }

    /// Reset the newest slot to the sentinel. Other slots are untouched.
    pub fn clear_newest(&mut self) {
        let newest = self.newest_index();
        self.slots[newest] = None;
    }

    /// Newest slot.
    pub fn newest(&self) -> Option<T> {
        self.slots[self.newest_index()]
    }

    /// Oldest slot.
    pub fn oldest(&self) -> Option<T> {
        self.slots[self.head]
    }

    /// Slots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
        (0..N).map(move |offset| self.slots[(self.head + offset) % N])
    }

    /// Snapshot of the slots from oldest to newest.
    pub fn to_array(&self) -> [Option<T>; N] {
        std::array::from_fn(|offset| self.slots[(self.head + offset) % N])
    }

    /// True when no slot holds the sentinel.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    fn newest_index(&self) -> usize {
        (self.head + N - 1) % N
    }
}

impl<T: Copy, const N: usize> Default for Window<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
