use std::collections::HashMap;
use std::rc::Rc;

use chrono::{Duration, NaiveDate};

use crate::model::week::{DayEntry, EntryUpdate, WeekKey, WeekRecord};
use crate::time::is_supported;

/// Registrations for every week touched in this session.
///
/// Updates never modify a registry in place: [`WeekRegistry::set_entry`]
/// returns a new value and leaves the receiver as it was. Records are shared
/// between the old and new registry; only the edited week is copied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekRegistry {
    weeks: HashMap<WeekKey, Rc<WeekRecord>>,
}

impl WeekRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored record, or an empty one when the week was never edited.
    /// A miss does not insert anything.
    pub fn get_week(&self, key: &WeekKey) -> WeekRecord {
        self.weeks.get(key).map(|rc| (**rc).clone()).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn stored(&self, key: &WeekKey) -> Option<&Rc<WeekRecord>> {
        self.weeks.get(key)
    }

    /// # Panics
    ///
    /// If `day` is not in `0..7`.
    #[must_use]
    pub fn set_entry(&self, key: WeekKey, day: usize, update: EntryUpdate) -> Self {
        tracing::debug!(week = %key, day, ?update, "set entry");
        let record = match self.weeks.get(&key) {
            Some(rc) => rc.with_entry(day, update),
            None => WeekRecord::empty().with_entry(day, update),
        };
        let mut weeks = self.weeks.clone();
        weeks.insert(key, Rc::new(record));
        Self { weeks }
    }

    pub fn contains(&self, key: &WeekKey) -> bool {
        self.weeks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn weeks(&self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Stays on `monday` when the step would leave the supported calendar.
pub fn navigate(monday: NaiveDate, direction: Direction) -> NaiveDate {
    match Duration::try_weeks(direction.weeks())
        .and_then(|step| monday.checked_add_signed(step))
        .filter(|&next| is_supported(next))
    {
        Some(next) => next,
        None => {
            tracing::warn!(%monday, ?direction, "week out of range");
            monday
        }
    }
}

/// Adding `0.0` turns a `-0.0` sum into `0.0`.
pub fn week_total(record: &WeekRecord) -> f64 {
    record.iter().map(DayEntry::hours_value).sum::<f64>() + 0.0
}
