//! Candidate enumeration.

use std::iter::FusedIterator;

use tumbler_core::Combination;

/// Every combination in lexicographic order, `AAA` first and `ZZZ` last.
///
/// The n-th item (1-based) is the combination with rank n.
#[derive(Debug, Clone)]
pub struct Candidates {
    next_rank: u32,
}

impl Candidates {
    /// Start the enumeration at `AAA`.
    pub fn new() -> Self {
        Self { next_rank: 1 }
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Candidates {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = Combination::from_rank(self.next_rank)?;
        self.next_rank += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (Combination::SPACE + 1).saturating_sub(self.next_rank) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates {}

impl FusedIterator for Candidates {}
