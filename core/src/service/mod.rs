pub mod dto;
pub mod timesheet;
