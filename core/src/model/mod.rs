pub mod activity_code;
pub mod week;
