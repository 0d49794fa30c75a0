// Calendar Scheduler Library
// Scheduler view state, derived layout values and preference persistence

pub mod config;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod utils;

pub use scheduler::{DayEvents, DialogState, SchedulerState};
