use chrono::{Datelike, Months, NaiveDate, TimeZone};
use tracing::warn;

use crate::util::time::date_from_millis;

const MONTHS_IN_YEAR: u32 = 12;

/// Calendar breakdown of an elapsed interval.
///
/// The fields only mean something together: they are the result of stepping
/// whole years, then whole months, then days from the earlier date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Outcome of comparing an event date against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysDifference {
    /// Event falls on the reference date.
    Today { timestamp: i64 },
    /// `total_days` is positive for past events and negative for future ones.
    Calculated {
        period: Period,
        total_days: i64,
        timestamp: i64,
    },
}

impl DaysDifference {
    pub fn timestamp(&self) -> i64 {
        match self {
            DaysDifference::Today { timestamp } => *timestamp,
            DaysDifference::Calculated { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_future(&self) -> bool {
        matches!(self, DaysDifference::Calculated { total_days, .. } if *total_days < 0)
    }
}

/// Compare two calendar dates.
///
/// The timestamp carried by the result is the event date at midnight UTC.
pub fn compute_period(event: NaiveDate, reference: NaiveDate) -> DaysDifference {
    let timestamp = event
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default();
    compute_with_timestamp(event, reference, timestamp)
}

/// Compare a stored millisecond timestamp against a reference date.
///
/// The timestamp is first normalized to a calendar date in `tz`. Timestamps
/// chrono cannot represent degrade to `Today` instead of failing.
pub fn difference_for_timestamp<Tz: TimeZone>(
    timestamp: i64,
    reference: NaiveDate,
    tz: &Tz,
) -> DaysDifference {
    let Some(event) = date_from_millis(timestamp, tz) else {
        warn!(timestamp, "Timestamp out of range, treating as today");
        return DaysDifference::Today { timestamp };
    };
    compute_with_timestamp(event, reference, timestamp)
}

fn compute_with_timestamp(
    event: NaiveDate,
    reference: NaiveDate,
    timestamp: i64,
) -> DaysDifference {
    if event == reference {
        return DaysDifference::Today { timestamp };
    }

    let (earlier, later) = if event < reference {
        (event, reference)
    } else {
        (reference, event)
    };

    DaysDifference::Calculated {
        period: period_between(earlier, later),
        total_days: reference.signed_duration_since(event).num_days(),
        timestamp,
    }
}

/// Years, months and days from `earlier` to `later`.
///
/// Offsets are always taken from `earlier` itself, and an offset landing on a
/// day the target month lacks is clamped to that month's last day. So
/// `earlier + (years * 12 + months) months + days` is exactly `later`.
pub fn period_between(earlier: NaiveDate, later: NaiveDate) -> Period {
    debug_assert!(earlier <= later);

    let mut total_months = month_index(later) - month_index(earlier);
    let mut anchor = add_months(earlier, total_months);
    if anchor > later {
        total_months -= 1;
        anchor = add_months(earlier, total_months);
    }

    let years = total_months / MONTHS_IN_YEAR;
    let months = total_months % MONTHS_IN_YEAR;
    let days = later.signed_duration_since(anchor).num_days();

    Period {
        years: years as i32,
        months: months as i32,
        days: days as i32,
    }
}

fn month_index(date: NaiveDate) -> u32 {
    // Only differences are used, so the shifted year keeps the index unsigned.
    (date.year() + 400_000) as u32 * MONTHS_IN_YEAR + date.month0()
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    // Both ends are valid dates, so the sum never leaves chrono's range.
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_index_orders_across_year_boundary() {
        assert_eq!(month_index(d(2024, 1, 1)) - month_index(d(2023, 12, 31)), 1);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
    }
}
