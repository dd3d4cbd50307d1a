// Service module exports

pub mod clock;
pub mod event;
pub mod filter;
pub mod grid;
pub mod placement;
pub mod sample;
pub mod settings;
pub mod shared;
pub mod view;
pub mod workflow;
