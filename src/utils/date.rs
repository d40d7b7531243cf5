//! Date helpers
//!
//! Calendar arithmetic, checks and formatting on `chrono::DateTime`.

use crate::error::{HelperError, HelperResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Days, Months, TimeDelta, TimeZone, Utc};
use std::fmt::Display;

/// Format used when callers have no preference
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Helper methods on zoned date-times.
///
/// Arithmetic happens in the value's own time zone. Results that would fall
/// outside chrono's representable range leave the date unchanged.
pub trait DateExt: Sized {
    fn adding_days(&self, days: i64) -> Self;

    /// Same day of the following month(s), clamped to the month's last day
    fn adding_months(&self, months: i32) -> Self;

    fn adding_seconds(&self, seconds: i64) -> Self;

    /// 1 = Sunday, 2 = Monday, ..., 7 = Saturday
    fn day_of_week(&self) -> u32;

    fn is_in_future(&self) -> bool;

    /// Whether `other` falls on the same calendar day in `self`'s time zone
    fn is_same_day<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool;

    /// Render with a strftime-style format such as [`DEFAULT_DATE_FORMAT`]
    fn formatted(&self, format: &str) -> HelperResult<String>;
}

impl<Tz: TimeZone> DateExt for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn adding_days(&self, days: i64) -> Self {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.clone().checked_add_days(magnitude)
        } else {
            self.clone().checked_sub_days(magnitude)
        };
        shifted.unwrap_or_else(|| self.clone())
    }

    fn adding_months(&self, months: i32) -> Self {
        let magnitude = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.clone().checked_add_months(magnitude)
        } else {
            self.clone().checked_sub_months(magnitude)
        };
        shifted.unwrap_or_else(|| self.clone())
    }

    fn adding_seconds(&self, seconds: i64) -> Self {
        TimeDelta::try_seconds(seconds)
            .and_then(|delta| self.clone().checked_add_signed(delta))
            .unwrap_or_else(|| self.clone())
    }

    fn day_of_week(&self) -> u32 {
        self.weekday().number_from_sunday()
    }

    fn is_in_future(&self) -> bool {
        *self > Utc::now()
    }

    fn is_same_day<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool {
        self.date_naive() == other.with_timezone(&self.timezone()).date_naive()
    }

    fn formatted(&self, format: &str) -> HelperResult<String> {
        let items: Vec<Item> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(HelperError::InvalidDateFormat(format.to_string()));
        }
        Ok(self.format_with_items(items.into_iter()).to_string())
    }
}
