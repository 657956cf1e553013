use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub const UNSELECTED_LABEL: &str = "— Vælg kode —";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    #[serde(rename = "100")]
    Regular,
    #[serde(rename = "110")]
    Overtime,
    #[serde(rename = "200")]
    Vacation,
    #[serde(rename = "210")]
    TimeOffInLieu,
    #[serde(rename = "300")]
    Sickness,
    #[serde(rename = "310")]
    ChildSick,
    #[serde(rename = "400")]
    Course,
    #[serde(rename = "500")]
    DayOff,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 8] = [
        ActivityCode::Regular,
        ActivityCode::Overtime,
        ActivityCode::Vacation,
        ActivityCode::TimeOffInLieu,
        ActivityCode::Sickness,
        ActivityCode::ChildSick,
        ActivityCode::Course,
        ActivityCode::DayOff,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ActivityCode::Regular => "100",
            ActivityCode::Overtime => "110",
            ActivityCode::Vacation => "200",
            ActivityCode::TimeOffInLieu => "210",
            ActivityCode::Sickness => "300",
            ActivityCode::ChildSick => "310",
            ActivityCode::Course => "400",
            ActivityCode::DayOff => "500",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityCode::Regular => "100 – Almindeligt arbejde",
            ActivityCode::Overtime => "110 – Overarbejde",
            ActivityCode::Vacation => "200 – Ferie",
            ActivityCode::TimeOffInLieu => "210 – Afspadsering",
            ActivityCode::Sickness => "300 – Sygdom",
            ActivityCode::ChildSick => "310 – Barn syg",
            ActivityCode::Course => "400 – Kursus / uddannelse",
            ActivityCode::DayOff => "500 – Fridag",
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ActivityCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ActivityCode::ALL
            .into_iter()
            .find(|c| c.code() == s.trim())
            .ok_or_else(|| anyhow!("Unknown activity code: '{}'", s))
    }
}

/// One line of the code selector. The first entry is the unselected placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub code: Option<ActivityCode>,
    pub label: &'static str,
}

pub fn catalog() -> Vec<CatalogEntry> {
    std::iter::once(CatalogEntry { code: None, label: UNSELECTED_LABEL })
        .chain(ActivityCode::ALL.into_iter().map(|c| CatalogEntry { code: Some(c), label: c.label() }))
        .collect()
}

/// Empty text means "no code selected".
pub fn parse_code(text: &str) -> Result<Option<ActivityCode>> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

pub fn code_label(code: Option<ActivityCode>) -> &'static str {
    code.map(|c| c.label()).unwrap_or(UNSELECTED_LABEL)
}

/// Steps through the catalog, wrapping around the placeholder.
pub fn cycle(current: Option<ActivityCode>, forward: bool) -> Option<ActivityCode> {
    let entries = catalog();
    let len = entries.len();
    let pos = entries.iter().position(|e| e.code == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    entries[next].code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_with_placeholder() {
        let entries = catalog();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0], CatalogEntry { code: None, label: UNSELECTED_LABEL });
        assert_eq!(entries[1].code, Some(ActivityCode::Regular));
        assert_eq!(entries[8].label, "500 – Fridag");
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("").unwrap(), None);
        assert_eq!(parse_code("310").unwrap(), Some(ActivityCode::ChildSick));
        assert_eq!(parse_code(" 400 ").unwrap(), Some(ActivityCode::Course));
        assert!(parse_code("999").is_err());
    }

    #[test]
    fn test_cycle_wraps_through_placeholder() {
        assert_eq!(cycle(None, true), Some(ActivityCode::Regular));
        assert_eq!(cycle(Some(ActivityCode::DayOff), true), None);
        assert_eq!(cycle(None, false), Some(ActivityCode::DayOff));
        assert_eq!(cycle(Some(ActivityCode::Regular), false), None);
    }

    #[test]
    fn test_serde_uses_code_text() {
        let json = serde_json::to_string(&ActivityCode::Vacation).unwrap();
        assert_eq!(json, "\"200\"");
    }
}
