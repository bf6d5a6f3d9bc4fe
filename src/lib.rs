// Core modules
pub mod api;
pub mod calendar;
pub mod config;
pub mod indicators;
pub mod models;
pub mod screener;
pub mod strategy;

// Re-export commonly used types
pub use api::{AlpacaClient, EodhdClient};
pub use models::*;
pub use strategy::SignalConfig;

// Error handling
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
