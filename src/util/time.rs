use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Offset, TimeZone};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar date of a millisecond timestamp as seen in `tz`.
///
/// `None` when the timestamp, or its local time in `tz`, is outside chrono's range.
pub fn date_from_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<NaiveDate> {
    let naive = DateTime::from_timestamp_millis(millis)?.naive_utc();
    let offset = tz.offset_from_utc_datetime(&naive).fix();
    naive.checked_add_offset(offset).map(|local| local.date())
}

/// Millisecond timestamp of midnight at the start of `date` in `tz`.
///
/// When midnight falls into a DST gap the first valid instant of the day wins.
pub fn millis_from_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<i64> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return Some(dt.timestamp_millis());
    }
    let one_am = date.and_hms_opt(1, 0, 0)?;
    tz.from_local_datetime(&one_am)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .with_context(|| format!("Invalid date {value:?}, expected YYYY-MM-DD"))
}
