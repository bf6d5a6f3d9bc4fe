use crate::indicators::{calculate_sma, compute_derived};
use crate::models::{Bar, Candidate, DerivedPoint};
use crate::Result;

/// Configuration for signal evaluation
#[derive(Debug, Clone)]
pub struct SignalConfig {
    pub rsi_period: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub volume_period: usize,
    pub price_period: usize,
    /// Minimum close vs previous close for a breakout (1.01 = +1%)
    pub breakout_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            ema_fast: 9,
            ema_slow: 21,
            volume_period: 20,
            price_period: 50,
            breakout_threshold: 1.01,
        }
    }
}

impl SignalConfig {
    /// Bars needed before every indicator on the latest bar is defined
    pub fn min_bars_required(&self) -> usize {
        self.rsi_period
            .max(self.ema_slow)
            .max(self.volume_period)
            .max(self.price_period)
            + 1
    }
}

/// The six independent conditions of the buy rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalChecks {
    /// Latest RSI > 50
    pub rsi_ok: bool,
    /// Latest close above the trailing price-period mean
    pub trend: bool,
    /// Fast EMA above slow EMA
    pub ema_cross: bool,
    /// Latest volume above its rolling average
    pub vol_ok: bool,
    /// Latest close above the anchored VWAP
    pub avwap_ok: bool,
    /// Breakout: close above previous close * threshold, on above-average volume
    pub fired: bool,
}

impl SignalChecks {
    pub fn all(&self) -> bool {
        self.rsi_ok && self.trend && self.ema_cross && self.vol_ok && self.avwap_ok && self.fired
    }
}

/// Round to 2 decimal places (reference prices, order quantities)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validate the series invariant: dates strictly increasing, no duplicates
pub fn validate_series(bars: &[Bar]) -> anyhow::Result<()> {
    for window in bars.windows(2) {
        if window[1].date <= window[0].date {
            anyhow::bail!(
                "bars out of order: {} does not follow {}",
                window[1].date,
                window[0].date
            );
        }
    }
    Ok(())
}

/// Evaluate one symbol's series against the full rule set
///
/// Returns a Candidate only when all six conditions hold on the latest bar.
/// Insufficient or malformed history is an error, never a silent "no".
pub fn evaluate_symbol(symbol: &str, bars: &[Bar], config: &SignalConfig) -> Result<Option<Candidate>> {
    if bars.len() < config.min_bars_required() {
        return Err(format!(
            "insufficient history: {} bars, need {}",
            bars.len(),
            config.min_bars_required()
        )
        .into());
    }
    validate_series(bars)?;

    let derived = compute_derived(
        bars,
        config.rsi_period,
        config.ema_fast,
        config.ema_slow,
        config.volume_period,
    );

    let checks = signal_checks(bars, &derived, config)?;
    let latest = &bars[bars.len() - 1];
    let point = &derived[derived.len() - 1];

    tracing::debug!(
        "{}: close={:.2} rsi_ok={} trend={} ema_cross={} vol_ok={} avwap_ok={} fired={} (squeeze={:?})",
        symbol,
        latest.close,
        checks.rsi_ok,
        checks.trend,
        checks.ema_cross,
        checks.vol_ok,
        checks.avwap_ok,
        checks.fired,
        point.squeeze_active,
    );

    if checks.all() {
        Ok(Some(Candidate {
            symbol: symbol.to_string(),
            price: round2(latest.close),
        }))
    } else {
        Ok(None)
    }
}

/// Compute the six conditions from the latest bar and its derived point
///
/// Errors when any required indicator is still undefined at the latest bar.
pub fn signal_checks(
    bars: &[Bar],
    derived: &[DerivedPoint],
    config: &SignalConfig,
) -> Result<SignalChecks> {
    if bars.len() < 2 {
        return Err("need at least two bars to evaluate".into());
    }
    let latest = &bars[bars.len() - 1];
    let prev = &bars[bars.len() - 2];
    let point = derived.last().ok_or("empty derived series")?;

    let rsi = point.rsi.ok_or("RSI undefined at latest bar")?;
    let volume_avg = point.volume_avg.ok_or("volume average undefined at latest bar")?;
    let vwap = point.anchored_vwap.ok_or("anchored VWAP undefined at latest bar")?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let price_mean = calculate_sma(&closes, config.price_period)
        .ok_or("price mean undefined at latest bar")?;

    Ok(SignalChecks {
        rsi_ok: rsi > 50.0,
        trend: latest.close > price_mean,
        ema_cross: point.ema_fast > point.ema_slow,
        vol_ok: latest.volume > volume_avg,
        avwap_ok: latest.close > vwap,
        fired: latest.close > prev.close * config.breakout_threshold
            && latest.volume > volume_avg,
    })
}
