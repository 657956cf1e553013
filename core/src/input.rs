use anyhow::{anyhow, Context, Result};

use crate::model::activity_code::parse_code;
use crate::model::week::{EntryUpdate, DAY_NAMES};

/// One `day:hours[@code]` token from the command line.
#[derive(Debug, PartialEq)]
pub struct DayAssignment {
    pub day: usize,
    pub updates: Vec<EntryUpdate>,
}

pub fn parse_assignments(args: &[String]) -> Result<Vec<DayAssignment>> {
    args.iter().map(|arg| parse_assignment(arg)).collect()
}

fn parse_assignment(arg: &str) -> Result<DayAssignment> {
    let (key, value) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("Expected day:hours[@code], got '{}'", arg))?;
    let day = day_index(key)?;

    let (hours, code) = match value.split_once('@') {
        Some((hours, code)) => (hours, Some(code)),
        None => (value, None),
    };

    let mut updates = Vec::new();
    if !hours.is_empty() {
        updates.push(EntryUpdate::Hours(hours.to_string()));
    }
    if let Some(code) = code {
        let code = parse_code(code).with_context(|| format!("in '{}'", arg))?;
        updates.push(EntryUpdate::Code(code));
    }
    if updates.is_empty() {
        return Err(anyhow!("Nothing to set in '{}'", arg));
    }

    Ok(DayAssignment { day, updates })
}

/// Index of a (possibly abbreviated) Danish day name.
pub fn day_index(key: &str) -> Result<usize> {
    let candidates: Vec<String> = DAY_NAMES.iter().map(|d| d.to_lowercase()).collect();
    let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let full = expand_key(&key.to_lowercase(), &candidates)?;
    candidates
        .iter()
        .position(|&c| c == full)
        .ok_or_else(|| anyhow!("Unknown day: '{}'", key))
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}
