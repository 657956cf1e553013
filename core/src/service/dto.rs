use serde::Serialize;
use chrono::{Duration, NaiveDate};

use crate::model::activity_code::code_label;
use crate::model::week::{is_weekend, WeekKey, WeekRecord, DAY_NAMES};
use crate::registry::week_total;
use crate::time::{format_short_date, format_week_range, iso_week_number, week_key};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayView {
    pub name: &'static str,
    pub date: NaiveDate,
    pub date_label: String,
    pub code: Option<String>,
    pub code_label: &'static str,
    pub hours: String,
    pub weekend: bool,
}

/// Everything the table needs to render one week.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekView {
    pub key: WeekKey,
    pub week_number: u32,
    pub range_label: String,
    pub header: String,
    pub days: Vec<DayView>,
    pub total_hours: f64,
    pub total_label: String,
}

impl WeekView {
    pub fn build(monday: NaiveDate, record: &WeekRecord) -> Self {
        let week_number = iso_week_number(monday);
        let range_label = format_week_range(monday);

        let days = record
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let date = monday + Duration::days(i as i64);
                DayView {
                    name: DAY_NAMES[i],
                    date,
                    date_label: format_short_date(date),
                    code: entry.code.map(|c| c.code().to_string()),
                    code_label: code_label(entry.code),
                    hours: entry.hours.clone(),
                    weekend: is_weekend(i),
                }
            })
            .collect();

        let total_hours = week_total(record);

        WeekView {
            key: week_key(monday),
            week_number,
            header: format!("Uge {} · {}", week_number, range_label),
            range_label,
            days,
            total_hours,
            total_label: format_total(total_hours),
        }
    }
}

/// Whole numbers print without decimals, anything else with one.
pub fn format_total(total: f64) -> String {
    let total = total + 0.0;
    if total.fract() == 0.0 {
        format!("{} timer", total)
    } else {
        format!("{:.1} timer", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity_code::{ActivityCode, UNSELECTED_LABEL};
    use crate::model::week::EntryUpdate;

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(0.0), "0 timer");
        assert_eq!(format_total(37.0), "37 timer");
        assert_eq!(format_total(15.5), "15.5 timer");
        assert_eq!(format_total(8.33), "8.3 timer");
        assert_eq!(format_total(-0.0), "0 timer");
    }

    #[test]
    fn test_build_week_view() {
        let monday = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let record = WeekRecord::empty()
            .with_entry(0, EntryUpdate::Hours("7.5".to_string()))
            .with_entry(0, EntryUpdate::Code(Some(ActivityCode::Vacation)))
            .with_entry(5, EntryUpdate::Hours("2".to_string()));

        let view = WeekView::build(monday, &record);

        assert_eq!(view.key.to_string(), "2024-12-30");
        assert_eq!(view.week_number, 1);
        assert_eq!(view.header, "Uge 1 · 30/12 – 05/01");
        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[0].code.as_deref(), Some("200"));
        assert_eq!(view.days[0].code_label, "200 – Ferie");
        assert_eq!(view.days[1].code_label, UNSELECTED_LABEL);
        assert_eq!(view.days[2].date_label, "01/01");
        assert_eq!(view.days[6].name, "Søndag");
        assert_eq!(view.days.iter().filter(|d| d.weekend).count(), 2);
        assert!(view.days[5].weekend && view.days[6].weekend);
        assert_eq!(view.total_label, "9.5 timer");
    }

    #[test]
    fn test_week_view_serializes_key_as_date_text() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let json = serde_json::to_value(WeekView::build(monday, &WeekRecord::empty())).unwrap();
        assert_eq!(json["key"], "2024-01-01");
        assert_eq!(json["days"][0]["date"], "2024-01-01");
        assert_eq!(json["days"][0]["code"], serde_json::Value::Null);
    }
}
