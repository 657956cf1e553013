pub mod week_registry;


pub use week_registry::{navigate, week_total, Direction, WeekRegistry};
