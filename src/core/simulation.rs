//! Simulation output: one bootstrapped date sequence.

use chrono::NaiveDate;

/// One bootstrapped date sequence covering a target window.
///
/// Pairs are ordered by target date; the target dates form the exact
/// contiguous sequence of the window the simulation was drawn for, and each
/// sampled date is a member of the historical set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    id: usize,
    pairs: Vec<(NaiveDate, NaiveDate)>,
}

impl Simulation {
    pub(crate) fn new(id: usize, pairs: Vec<(NaiveDate, NaiveDate)>) -> Self {
        Self { id, pairs }
    }

    /// 1-based simulation identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Ordered `(target_date, sampled_date)` pairs.
    pub fn pairs(&self) -> &[(NaiveDate, NaiveDate)] {
        &self.pairs
    }

    /// Number of pairs (equals the target window length).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the simulation holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Target dates in order.
    pub fn target_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.pairs.iter().map(|&(target, _)| target)
    }

    /// Sampled historical dates in target order.
    pub fn sampled_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.pairs.iter().map(|&(_, sampled)| sampled)
    }
}
