pub mod config;
pub mod input;
pub mod model;
pub mod registry;
pub mod service;
pub mod time;

pub use config::Config;
pub use input::{parse_assignments, day_index, expand_key, DayAssignment};
pub use model::activity_code::{ActivityCode, CatalogEntry, catalog, parse_code};
pub use model::week::{DayEntry, EntryUpdate, WeekKey, WeekRecord, DAY_NAMES, DAYS_PER_WEEK};
pub use registry::{WeekRegistry, Direction, navigate, week_total};
pub use service::dto::{DayView, WeekView};
pub use service::timesheet::{SaveReceipt, Timesheet};
pub use time::{monday_of, week_key, iso_week_number, format_short_date, parse_week_anchor};
