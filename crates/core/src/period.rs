use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Single-day range.
    pub fn day(date: NaiveDate) -> Self {
        DateRange::new(date, date)
    }

    /// Smallest range covering both `self` and `date`.
    pub fn including(self, date: NaiveDate) -> Self {
        DateRange {
            start: self.start.min(date),
            end: self.end.max(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn including_extends_both_ends() {
        let range = DateRange::day(date(2024, 3, 10))
            .including(date(2024, 3, 1))
            .including(date(2024, 3, 20))
            .including(date(2024, 3, 15));
        assert_eq!(range, DateRange::new(date(2024, 3, 1), date(2024, 3, 20)));
    }

    #[test]
    fn date_range_display() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(range.to_string(), "2024-01-01 to 2024-12-31");
    }
}
