pub mod app;
pub mod args;
pub mod coins;
pub mod display;
pub mod error;
pub mod export;
pub mod prices;
pub mod types;
pub mod utils;
