// Signal evaluation module
pub mod signals;

pub use signals::{evaluate_symbol, round2, SignalChecks, SignalConfig};
