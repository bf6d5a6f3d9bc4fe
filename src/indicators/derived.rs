use super::{anchored_vwap_series, ema_series, rolling_mean, rsi_series, squeeze_series};
use super::squeeze::SQUEEZE_WINDOW;
use crate::models::{Bar, DerivedPoint};

/// Compute every derived series for a bar series, aligned 1:1 with the bars
///
/// Pure and deterministic. Leading values an indicator cannot define yet
/// come back as None on the corresponding points.
pub fn compute_derived(
    bars: &[Bar],
    rsi_period: usize,
    ema_fast: usize,
    ema_slow: usize,
    volume_period: usize,
) -> Vec<DerivedPoint> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let rsi = rsi_series(&closes, rsi_period);
    let fast = ema_series(&closes, ema_fast);
    let slow = ema_series(&closes, ema_slow);
    let volume_avg = rolling_mean(&volumes, volume_period);
    let vwap = anchored_vwap_series(&closes, &volumes);
    let squeeze = squeeze_series(&closes, &highs, &lows, SQUEEZE_WINDOW);

    (0..bars.len())
        .map(|i| DerivedPoint {
            rsi: rsi[i],
            ema_fast: fast[i],
            ema_slow: slow[i],
            volume_avg: volume_avg[i],
            anchored_vwap: vwap[i],
            squeeze_active: squeeze[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bars(closes: Vec<f64>, volumes: Vec<f64>) -> Vec<Bar> {
        closes
            .iter()
            .zip(volumes.iter())
            .enumerate()
            .map(|(i, (&close, &volume))| Bar {
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
                    + chrono::Days::new(i as u64),
                close,
                high: close * 1.01,
                low: close * 0.99,
                volume,
            })
            .collect()
    }

    #[test]
    fn test_derived_aligned_with_bars() {
        let bars = make_bars(
            (0..60).map(|i| 100.0 + i as f64).collect(),
            vec![1000.0; 60],
        );
        let derived = compute_derived(&bars, 14, 9, 21, 20);
        assert_eq!(derived.len(), bars.len());
    }

    #[test]
    fn test_leading_window_undefined() {
        let bars = make_bars(
            (0..60).map(|i| 100.0 + i as f64).collect(),
            vec![1000.0; 60],
        );
        let derived = compute_derived(&bars, 14, 9, 21, 20);

        assert!(derived[0].rsi.is_none());
        assert!(derived[18].volume_avg.is_none());
        assert!(derived[18].squeeze_active.is_none());

        let last = derived.last().unwrap();
        assert!(last.rsi.is_some());
        assert!(last.volume_avg.is_some());
        assert!(last.anchored_vwap.is_some());
        assert!(last.squeeze_active.is_some());
    }

    #[test]
    fn test_rising_series_closes_above_vwap_and_fast_above_slow() {
        let bars = make_bars(
            (0..60).map(|i| 100.0 + i as f64).collect(),
            vec![1000.0; 60],
        );
        let derived = compute_derived(&bars, 14, 9, 21, 20);
        let last = derived.last().unwrap();

        assert!(last.ema_fast > last.ema_slow);
        assert!(bars.last().unwrap().close > last.anchored_vwap.unwrap());
    }
}
