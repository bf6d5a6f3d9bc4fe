use super::moving_average::rolling_mean;

/// Window shared by both bands
pub const SQUEEZE_WINDOW: usize = 20;

/// Volatility-squeeze flag per bar
///
/// True when the upper Bollinger band (rolling mean + 2 * sample std-dev of
/// close) sits below the upper Keltner band (rolling mean of close +
/// 1.5 * rolling mean of the high-low range). A squeeze marks volatility
/// contraction; the flag is advisory and does not gate the buy decision.
pub fn squeeze_series(
    closes: &[f64],
    highs: &[f64],
    lows: &[f64],
    window: usize,
) -> Vec<Option<bool>> {
    debug_assert_eq!(closes.len(), highs.len());
    debug_assert_eq!(closes.len(), lows.len());

    let close_mean = rolling_mean(closes, window);
    let close_std = rolling_std(closes, window);

    let ranges: Vec<f64> = highs.iter().zip(lows.iter()).map(|(h, l)| h - l).collect();
    let range_mean = rolling_mean(&ranges, window);

    (0..closes.len())
        .map(|i| match (close_mean[i], close_std[i], range_mean[i]) {
            (Some(mean), Some(std), Some(range)) => {
                let bollinger_upper = mean + 2.0 * std;
                let keltner_upper = mean + 1.5 * range;
                Some(bollinger_upper < keltner_upper)
            }
            _ => None,
        })
        .collect()
}

/// Rolling sample standard deviation (n-1 denominator), trailing window
fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window < 2 {
        return out;
    }

    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        out[i] = Some(var.sqrt());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squeeze_fires_on_flat_closes_with_wide_range() {
        // Constant closes: zero std-dev, so the Bollinger band collapses onto
        // the mean while the range keeps the Keltner band above it.
        let closes = vec![100.0; 25];
        let highs = vec![101.0; 25];
        let lows = vec![99.0; 25];

        let squeeze = squeeze_series(&closes, &highs, &lows, SQUEEZE_WINDOW);
        assert_eq!(squeeze[18], None);
        assert_eq!(squeeze[19], Some(true));
        assert_eq!(*squeeze.last().unwrap(), Some(true));
    }

    #[test]
    fn test_no_squeeze_on_volatile_closes_with_tight_range() {
        let closes: Vec<f64> = (0..25)
            .map(|i| if i % 2 == 0 { 90.0 } else { 110.0 })
            .collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 0.1).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 0.1).collect();

        let squeeze = squeeze_series(&closes, &highs, &lows, SQUEEZE_WINDOW);
        assert_eq!(*squeeze.last().unwrap(), Some(false));
    }

    #[test]
    fn test_rolling_std_known_value() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = rolling_std(&values, 8);
        // Sample std-dev of the classic fixture is sqrt(32/7)
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((std[7].unwrap() - expected).abs() < 1e-12);
    }
}
