/*!
This module holds the option structures that can be passed to the sorting operations.
*/

use std::fmt;

/**
Whether a sort preserves the input order of elements that compare as
[`Order::Equal`](crate::Order::Equal).
*/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Stability {
    /// Elements that compare equal keep their relative input order.
    #[default]
    Stable,

    /**
    Elements that compare equal may be reordered.

    This can be faster and does not allocate, but callers chaining comparators usually expect ties
    to be preserved.
    */
    Unstable,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stability::Stable => write!(f, "stable"),
            Stability::Unstable => write!(f, "unstable"),
        }
    }
}

/// Holds options to control how a sequence is sorted with a comparator.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortOptions {
    /**
    The stability guarantee of the sort.

    **This defaults to [`Stability::Stable`].**
    */
    stability: Stability,
}

/// Public methods
impl SortOptions {
    /// Get the stability guarantee of the sort.
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Set the stability guarantee of the sort.
    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Shorthand for options requesting an unstable sort.
    pub fn unstable() -> Self {
        SortOptions::default().with_stability(Stability::Unstable)
    }
}
