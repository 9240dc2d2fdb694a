//! Target window: the date range a simulation must cover.

use crate::error::{BootstrapError, Result};
use chrono::{Duration, NaiveDate};

/// Maximum target window length in days.
pub const MAX_WINDOW_DAYS: i64 = 365;

/// An inclusive, contiguous date range `[start, end]` of at most
/// [`MAX_WINDOW_DAYS`] days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TargetWindow {
    /// Create a target window, validating ordering and length.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start >= end {
            return Err(BootstrapError::InvalidRange { start, end });
        }

        let days = (end - start).num_days() + 1;
        if days > MAX_WINDOW_DAYS {
            return Err(BootstrapError::WindowTooLong {
                days,
                max: MAX_WINDOW_DAYS,
            });
        }

        Ok(Self { start, end })
    }

    /// First date of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterate over the window's dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.num_days() as i64).map(move |i| start + Duration::days(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_counts_both_endpoints() {
        let window = TargetWindow::new(date(2018, 1, 1), date(2018, 1, 31)).unwrap();
        assert_eq!(window.num_days(), 31);
        assert_eq!(window.start(), date(2018, 1, 1));
        assert_eq!(window.end(), date(2018, 1, 31));
    }

    #[test]
    fn window_dates_are_contiguous_and_increasing() {
        let window = TargetWindow::new(date(2018, 2, 26), date(2018, 3, 3)).unwrap();
        let dates: Vec<_> = window.dates().collect();

        assert_eq!(dates.len(), window.num_days());
        assert_eq!(dates[0], date(2018, 2, 26));
        assert_eq!(*dates.last().unwrap(), date(2018, 3, 3));
        assert!(dates.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn window_rejects_reversed_range() {
        let result = TargetWindow::new(date(2018, 2, 1), date(2018, 1, 1));
        assert!(matches!(result, Err(BootstrapError::InvalidRange { .. })));
    }

    #[test]
    fn window_rejects_equal_endpoints() {
        let result = TargetWindow::new(date(2018, 1, 1), date(2018, 1, 1));
        assert!(matches!(result, Err(BootstrapError::InvalidRange { .. })));
    }

    #[test]
    fn window_rejects_ranges_over_a_year() {
        let result = TargetWindow::new(date(2018, 1, 1), date(2019, 1, 1));
        assert_eq!(
            result,
            Err(BootstrapError::WindowTooLong { days: 366, max: 365 })
        );

        // Exactly 365 days is allowed.
        let window = TargetWindow::new(date(2018, 1, 1), date(2018, 12, 31)).unwrap();
        assert_eq!(window.num_days(), 365);
    }

    #[test]
    fn window_contains_is_inclusive() {
        let window = TargetWindow::new(date(2018, 1, 1), date(2018, 1, 31)).unwrap();
        assert!(window.contains(date(2018, 1, 1)));
        assert!(window.contains(date(2018, 1, 31)));
        assert!(!window.contains(date(2017, 12, 31)));
        assert!(!window.contains(date(2018, 2, 1)));
    }
}
