//! Historical date set: the immutable input to the bootstrap.

use crate::error::{BootstrapError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Minimum historical coverage (in days, counting both endpoints) required
/// for seasonal sampling.
///
/// The sampler rewrites the year of a candidate date to a randomly chosen
/// historical year; with less than a full year of coverage most rewrites
/// would land outside the data and the retry loop could not terminate.
pub const MIN_COVERAGE_DAYS: i64 = 365;

/// A deduplicated, sorted, immutable set of historical calendar dates.
///
/// Construction validates that the set is non-empty and spans at least one
/// full year. Gaps inside the span are allowed; the sampler rejects any
/// candidate block that would cover a missing date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSet {
    dates: BTreeSet<NaiveDate>,
    years: Vec<i32>,
    first: NaiveDate,
    last: NaiveDate,
}

impl DateSet {
    /// Build a date set from any collection of dates.
    ///
    /// Duplicates are dropped and ordering is normalized internally.
    pub fn new<I>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let dates: BTreeSet<NaiveDate> = dates.into_iter().collect();

        let (first, last) = match (dates.first(), dates.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(BootstrapError::EmptyDates),
        };

        // Inclusive coverage: a single full year spans 365 days.
        let coverage = (last - first).num_days() + 1;
        if coverage < MIN_COVERAGE_DAYS {
            return Err(BootstrapError::InsufficientHistory {
                needed: MIN_COVERAGE_DAYS,
                got: coverage,
            });
        }

        let mut years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
        years.dedup();

        Ok(Self {
            dates,
            years,
            first,
            last,
        })
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set is empty (never true for a constructed set).
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest historical date.
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Latest historical date.
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Number of days between the earliest and latest date.
    pub fn span_days(&self) -> i64 {
        (self.last - self.first).num_days()
    }

    /// Whether `date` is present in the set.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Distinct calendar years present, in ascending order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Iterate over the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_of_days(year: i32) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        start.iter_days().take_while(|d| *d <= end).collect()
    }

    #[test]
    fn date_set_deduplicates_and_sorts() {
        let mut dates = year_of_days(2016);
        dates.extend(year_of_days(2016)); // duplicates
        dates.reverse();

        let set = DateSet::new(dates).unwrap();

        assert_eq!(set.len(), 366); // 2016 is a leap year
        assert_eq!(set.first(), NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
        assert_eq!(set.last(), NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());

        let sorted: Vec<_> = set.iter().collect();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn date_set_rejects_empty_input() {
        let result = DateSet::new(std::iter::empty());
        assert_eq!(result, Err(BootstrapError::EmptyDates));
    }

    #[test]
    fn date_set_rejects_short_span() {
        let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let dates: Vec<_> = start.iter_days().take(90).collect();

        let result = DateSet::new(dates);
        assert_eq!(
            result,
            Err(BootstrapError::InsufficientHistory { needed: 365, got: 90 })
        );
    }

    #[test]
    fn date_set_accepts_a_single_full_year() {
        let set = DateSet::new(year_of_days(2015)).unwrap();
        assert_eq!(set.len(), 365);
        assert_eq!(set.years(), &[2015]);
    }

    #[test]
    fn date_set_lists_distinct_years() {
        let mut dates = year_of_days(2015);
        dates.extend(year_of_days(2016));
        dates.extend(year_of_days(2017));

        let set = DateSet::new(dates).unwrap();
        assert_eq!(set.years(), &[2015, 2016, 2017]);
    }

    #[test]
    fn date_set_tolerates_gaps_inside_span() {
        let mut dates = year_of_days(2015);
        dates.extend(year_of_days(2017)); // 2016 entirely missing

        let set = DateSet::new(dates).unwrap();
        assert_eq!(set.years(), &[2015, 2017]);
        assert!(!set.contains(NaiveDate::from_ymd_opt(2016, 6, 1).unwrap()));
        assert!(set.contains(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap()));
    }

    #[test]
    fn date_set_span_covers_full_range() {
        let mut dates = year_of_days(2015);
        dates.extend(year_of_days(2016));

        let set = DateSet::new(dates).unwrap();
        assert_eq!(set.span_days(), 730); // 2015-01-01 .. 2016-12-31
    }
}
