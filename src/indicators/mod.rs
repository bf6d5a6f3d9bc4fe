// Technical indicators module
// RSI, EMA/SMA, anchored VWAP and the volatility-squeeze flag

pub mod derived;
pub mod moving_average;
pub mod rsi;
pub mod squeeze;
pub mod vwap;

pub use derived::compute_derived;
pub use moving_average::{calculate_sma, ema_series, rolling_mean};
pub use rsi::rsi_series;
pub use squeeze::squeeze_series;
pub use vwap::anchored_vwap_series;
