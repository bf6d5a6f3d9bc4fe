/// Relative Strength Index (RSI)
///
/// Per-step price changes are split into gains and losses, each smoothed
/// with an exponentially-weighted average (alpha = 1/period, weighted from
/// the start of the series, infinite window). RSI = 100 - 100/(1+RS).
///
/// Policy: when the smoothed loss is exactly 0 (only gains so far, or a
/// perfectly flat series) RS is undefined; we report RSI = 100 instead of
/// letting a NaN leak into the decision rule.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if closes.len() < 2 || period == 0 {
        return out;
    }

    let alpha = 1.0 / period as f64;
    let decay = 1.0 - alpha;

    // Weighted numerators/denominator of the exponentially-weighted mean,
    // updated recursively per delta. The first value is the raw first delta.
    let mut gain_num = 0.0;
    let mut loss_num = 0.0;
    let mut denom = 0.0;

    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        gain_num = gain + decay * gain_num;
        loss_num = loss + decay * loss_num;
        denom = 1.0 + decay * denom;

        let avg_gain = gain_num / denom;
        let avg_loss = loss_num / denom;

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };

        out[i] = Some(rsi);
    }

    out
}
