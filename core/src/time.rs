use chrono::{Datelike, Duration, NaiveDate, Weekday};
use anyhow::{anyhow, Result};

use crate::model::week::WeekKey;

/// Monday of the week containing `date`. Sunday belongs to the preceding week.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().number_from_monday() as i64 - 1;
    date - Duration::days(offset)
}

pub fn week_key(monday: NaiveDate) -> WeekKey {
    WeekKey::containing(monday)
}

/// ISO-8601 week number: move to the Thursday of the same week, then count
/// whole weeks into that Thursday's year.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let weekday = date.weekday().number_from_monday() as i64;
    let thursday = date + Duration::days(4 - weekday);
    (thursday.ordinal() + 6) / 7
}

pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// "DD/MM – DD/MM" for the Monday and Sunday of the week.
pub fn format_week_range(monday: NaiveDate) -> String {
    match monday.checked_add_signed(Duration::days(6)) {
        Some(sunday) => format!("{} – {}", format_short_date(monday), format_short_date(sunday)),
        None => format_short_date(monday),
    }
}

/// Years 1..=9999. Every week in this range, Sunday included, stays inside
/// chrono's date range, so week arithmetic on it cannot overflow.
pub fn is_supported(date: NaiveDate) -> bool {
    (1..=9999).contains(&date.year())
}

/// Resolves the `--week` argument to a date. `today` is passed in so the
/// relative forms can be tested against a fixed anchor.
pub fn parse_week_anchor(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim().to_lowercase();
    let date = resolve_anchor(&input, today)?;
    if !is_supported(date) {
        return Err(anyhow!("Date out of range: {}", input));
    }
    Ok(date)
}

fn shift(today: NaiveDate, delta: Option<Duration>, input: &str) -> Result<NaiveDate> {
    delta
        .and_then(|d| today.checked_add_signed(d))
        .ok_or_else(|| anyhow!("Date out of range: {}", input))
}

fn resolve_anchor(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    // 1. Reserved keywords
    match input {
        "" | "today" | "tod" | "now" => return Ok(today),
        "next" => return shift(today, Duration::try_weeks(1), input),
        "prev" | "last" => return shift(today, Duration::try_weeks(-1), input),
        _ => {}
    }

    // 2. Relative format (+Nw, -Nw, +Nd, -Nd)
    if input.starts_with('+') || input.starts_with('-') {
        let parse_count = |num_str: &str| -> Result<i64> {
            num_str.parse().map_err(|_| anyhow!("Invalid relative format: {}", input))
        };
        return if let Some(num_str) = input.strip_suffix('w') {
            shift(today, Duration::try_weeks(parse_count(num_str)?), input)
        } else if let Some(num_str) = input.strip_suffix('d') {
            shift(today, Duration::try_days(parse_count(num_str)?), input)
        } else {
            Err(anyhow!("Unknown unit in relative time: {}", input))
        };
    }

    // 3. ISO week (2024-W05)
    if let Some((year, week)) = input.split_once("-w") {
        let year: i32 = year.parse().map_err(|_| anyhow!("Invalid ISO week year: {}", year))?;
        let week: u32 = week.parse().map_err(|_| anyhow!("Invalid ISO week number: {}", week))?;
        return NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or_else(|| anyhow!("Week {} does not exist in {}", week, year));
    }

    // 4. Calendar date
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_falls_on_monday_within_six_days() {
        let start = date(2023, 12, 1);
        for offset in 0..800 {
            let d = start + Duration::days(offset);
            let monday = monday_of(d);
            assert_eq!(monday.weekday(), Weekday::Mon, "{}", d);
            let diff = (d - monday).num_days();
            assert!((0..=6).contains(&diff), "{} -> {}", d, monday);
        }
    }

    #[test]
    fn test_monday_of_sunday_is_previous_monday() {
        // 2024-01-07 is a Sunday
        assert_eq!(monday_of(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(monday_of(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn test_iso_week_number_reference_values() {
        assert_eq!(iso_week_number(date(2024, 1, 1)), 1);
        assert_eq!(iso_week_number(date(2024, 12, 31)), 1);
        assert_eq!(iso_week_number(date(2020, 12, 31)), 53);
        assert_eq!(iso_week_number(date(2021, 1, 3)), 53);
        assert_eq!(iso_week_number(date(2021, 1, 4)), 1);
        assert_eq!(iso_week_number(date(2026, 10, 19)), 43);
    }

    #[test]
    fn test_iso_week_number_agrees_with_chrono() {
        let start = date(2019, 12, 20);
        for offset in 0..(365 * 8) {
            let d = start + Duration::days(offset);
            assert_eq!(iso_week_number(d), d.iso_week().week(), "{}", d);
        }
    }

    #[test]
    fn test_week_key_is_distinct_per_week() {
        let mut seen = std::collections::HashSet::new();
        let mut monday = date(2020, 1, 6);
        for _ in 0..(52 * 6) {
            assert!(seen.insert(week_key(monday).to_string()));
            monday += Duration::weeks(1);
        }
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(format_short_date(date(2024, 3, 4)), "04/03");
        assert_eq!(format_week_range(date(2024, 12, 30)), "30/12 – 05/01");
    }

    #[test]
    fn test_parse_week_anchor() {
        let today = date(2024, 5, 15);
        assert_eq!(parse_week_anchor("today", today).unwrap(), today);
        assert_eq!(parse_week_anchor("", today).unwrap(), today);
        assert_eq!(parse_week_anchor("next", today).unwrap(), date(2024, 5, 22));
        assert_eq!(parse_week_anchor("prev", today).unwrap(), date(2024, 5, 8));
        assert_eq!(parse_week_anchor("+2w", today).unwrap(), date(2024, 5, 29));
        assert_eq!(parse_week_anchor("-3d", today).unwrap(), date(2024, 5, 12));
        assert_eq!(parse_week_anchor("2024-W01", today).unwrap(), date(2024, 1, 1));
        assert_eq!(parse_week_anchor("2020-w53", today).unwrap(), date(2020, 12, 28));
        assert_eq!(parse_week_anchor("2023-02-14", today).unwrap(), date(2023, 2, 14));

        assert!(parse_week_anchor("2023-W60", today).is_err());
        assert!(parse_week_anchor("+2y", today).is_err());
        assert!(parse_week_anchor("someday", today).is_err());
    }

    #[test]
    fn test_parse_week_anchor_rejects_dates_out_of_range() {
        let today = date(2024, 5, 15);
        assert!(parse_week_anchor("+100000000w", today).is_err());
        assert!(parse_week_anchor("-100000000w", today).is_err());
        assert!(parse_week_anchor("+9223372036854775807d", today).is_err());
        assert!(parse_week_anchor("+1000000w", today).is_err());
        assert!(parse_week_anchor("10000-W01", today).is_err());
        assert!(parse_week_anchor("next", date(9999, 12, 31)).is_err());
        assert_eq!(parse_week_anchor("+10w", date(9999, 1, 1)).unwrap(), date(9999, 3, 12));
    }

    #[test]
    fn test_format_week_range_at_end_of_calendar() {
        assert_eq!(format_week_range(date(9999, 12, 27)), "27/12 – 02/01");
        assert_eq!(format_week_range(NaiveDate::MAX), format_short_date(NaiveDate::MAX));
    }
}
