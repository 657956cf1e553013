use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::activity_code::ActivityCode;
use crate::time::{is_supported, monday_of};

pub const DAYS_PER_WEEK: usize = 7;

pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag", "Søndag",
];

/// Saturday and Sunday in the Monday-start layout.
pub fn is_weekend(day: usize) -> bool {
    day >= 5
}

/// Identifies a week by its Monday. Always constructed through
/// [`WeekKey::containing`], so two dates in the same week share a key.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "String")]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    pub fn containing(date: NaiveDate) -> Self {
        WeekKey(monday_of(date))
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}

impl FromStr for WeekKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .filter(|&d| is_supported(d))
            .ok_or_else(|| anyhow!("Invalid week key: '{}'", s))?;
        Ok(WeekKey::containing(date))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DayEntry {
    pub hours: String,
    pub code: Option<ActivityCode>,
}

impl DayEntry {
    pub fn hours_value(&self) -> f64 {
        parse_hours(&self.hours)
    }

    fn apply(&mut self, update: EntryUpdate) {
        match update {
            EntryUpdate::Hours(hours) => self.hours = hours,
            EntryUpdate::Code(code) => self.code = code,
        }
    }
}

/// Replacement value for one field of a [`DayEntry`].
#[derive(Debug, Clone, PartialEq)]
pub enum EntryUpdate {
    Hours(String),
    Code(Option<ActivityCode>),
}

/// Monday..Sunday. The array keeps the length fixed at seven.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WeekRecord {
    days: [DayEntry; DAYS_PER_WEEK],
}

impl WeekRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(&self, day: usize) -> &DayEntry {
        &self.days[day]
    }

    pub fn days(&self) -> &[DayEntry; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayEntry> {
        self.days.iter()
    }

    /// Copy of this record with one day's field replaced.
    ///
    /// # Panics
    ///
    /// If `day` is not in `0..7`.
    pub fn with_entry(&self, day: usize, update: EntryUpdate) -> Self {
        assert!(day < DAYS_PER_WEEK, "day index {} out of range", day);
        let mut next = self.clone();
        next.days[day].apply(update);
        next
    }
}

/// Numeric reading of an hours field, taking the longest leading number the
/// way a lenient float parser does ("7.5h" reads as 7.5). No number means 0.
pub fn parse_hours(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
