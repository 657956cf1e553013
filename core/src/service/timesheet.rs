use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::week::{EntryUpdate, WeekKey, WeekRecord};
use crate::registry::{navigate, week_total, Direction, WeekRegistry};
use crate::service::dto::WeekView;
use crate::time::{is_supported, iso_week_number, monday_of, week_key};

/// Acknowledgement returned by [`Timesheet::save`]. Nothing is written anywhere.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SaveReceipt {
    pub week_number: u32,
    pub total_hours: f64,
}

impl fmt::Display for SaveReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uge {} gemt ({} timer)", self.week_number, self.total_hours)
    }
}

/// Session state: the week on screen and every registration made so far.
#[derive(Debug, Clone)]
pub struct Timesheet {
    monday: NaiveDate,
    registry: WeekRegistry,
}

impl Timesheet {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            monday: monday_of(today),
            registry: WeekRegistry::new(),
        }
    }

    pub fn current_monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn current_key(&self) -> WeekKey {
        week_key(self.monday)
    }

    pub fn current_week(&self) -> WeekRecord {
        self.registry.get_week(&self.current_key())
    }

    pub fn registry(&self) -> &WeekRegistry {
        &self.registry
    }

    pub fn update_day(&mut self, day: usize, update: EntryUpdate) {
        self.registry = self.registry.set_entry(self.current_key(), day, update);
    }

    pub fn go_to(&mut self, direction: Direction) {
        self.monday = navigate(self.monday, direction);
        tracing::debug!(week = %self.current_key(), "navigated");
    }

    /// Dates outside the supported calendar leave the current week in place.
    pub fn jump_to(&mut self, date: NaiveDate) {
        if !is_supported(date) {
            tracing::warn!(%date, "date out of range");
            return;
        }
        self.monday = monday_of(date);
        tracing::debug!(week = %self.current_key(), "jumped");
    }

    pub fn total(&self) -> f64 {
        week_total(&self.current_week())
    }

    pub fn week_number(&self) -> u32 {
        iso_week_number(self.monday)
    }

    pub fn save(&self) -> SaveReceipt {
        let receipt = SaveReceipt {
            week_number: self.week_number(),
            total_hours: self.total(),
        };
        tracing::info!(week = %self.current_key(), week_number = receipt.week_number, total = receipt.total_hours, "week saved");
        receipt
    }

    pub fn view(&self) -> WeekView {
        WeekView::build(self.monday, &self.current_week())
    }
}
