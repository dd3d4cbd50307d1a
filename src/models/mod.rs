// Module exports for models

pub mod category;
pub mod event;
pub mod filter;
pub mod recurrence;
pub mod settings;
pub mod ui;
