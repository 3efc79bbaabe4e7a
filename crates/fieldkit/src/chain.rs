//! Short-circuiting multi-key comparison.
//!
//! A chain is created at the start of a comparison, consumed in a single
//! expression, and discarded after producing its result. The first
//! non-equal step decides the outcome; later steps must never override
//! it, so decided chains skip their comparators entirely.

use std::cmp::Ordering;

/// Chain state: still deciding, or locked to an earlier decisive result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    /// Every step so far has compared equal.
    Deciding,
    /// An earlier step produced a non-equal ordering.
    Decided(Ordering),
}

/// A single-use chain of ordered comparisons.
///
/// Steps are appended with [`compare`](Self::compare) or
/// [`compare_by`](Self::compare_by); once a step yields a non-equal
/// ordering the chain is decided and subsequent comparators are not
/// evaluated. A chain with no steps resolves to [`Ordering::Equal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonChain {
    state: ChainState,
}

impl ComparisonChain {
    /// Start a chain with no comparisons performed.
    pub fn start() -> Self {
        Self {
            state: ChainState::Deciding,
        }
    }

    /// Append a comparison using the values' natural ordering.
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Self {
        self.step(|| a.cmp(b))
    }

    /// Append a comparison using an explicit comparator.
    ///
    /// This is the path for types without a total natural ordering,
    /// e.g. `chain.compare_by(&a, &b, f64::total_cmp)`.
    pub fn compare_by<T, F>(self, a: &T, b: &T, cmp: F) -> Self
    where
        T: ?Sized,
        F: FnOnce(&T, &T) -> Ordering,
    {
        self.step(|| cmp(a, b))
    }

    /// The chain's final ordering: the first non-equal step's result, or
    /// [`Ordering::Equal`] when every step tied or no steps were added.
    pub fn result(&self) -> Ordering {
        match self.state {
            ChainState::Deciding => Ordering::Equal,
            ChainState::Decided(ordering) => ordering,
        }
    }

    // The comparator is only evaluated while the chain is undecided.
    fn step<F: FnOnce() -> Ordering>(self, compare: F) -> Self {
        match self.state {
            ChainState::Decided(_) => self,
            ChainState::Deciding => match compare() {
                Ordering::Equal => self,
                decisive => Self {
                    state: ChainState::Decided(decisive),
                },
            },
        }
    }
}

impl Default for ComparisonChain {
    fn default() -> Self {
        Self::start()
    }
}
