// Module exports for models

pub mod event;
pub mod filter;
pub mod settings;
pub mod view_mode;
