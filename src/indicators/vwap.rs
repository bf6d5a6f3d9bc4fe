/// Anchored volume-weighted average price
///
/// Cumulative sum(close * volume) / sum(volume) from the first bar of the
/// series. The anchor never moves and the accumulator never resets.
/// Undefined (None) while cumulative volume is still zero.
pub fn anchored_vwap_series(closes: &[f64], volumes: &[f64]) -> Vec<Option<f64>> {
    debug_assert_eq!(closes.len(), volumes.len());

    let mut out = Vec::with_capacity(closes.len());
    let mut cum_pv = 0.0;
    let mut cum_vol = 0.0;

    for (&close, &volume) in closes.iter().zip(volumes.iter()) {
        cum_pv += close * volume;
        cum_vol += volume;
        if cum_vol > 0.0 {
            out.push(Some(cum_pv / cum_vol));
        } else {
            out.push(None);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avwap_constant_volume_equals_mean_close() {
        let closes = vec![10.0, 20.0, 30.0, 40.0];
        let volumes = vec![500.0; 4];
        let vwap = anchored_vwap_series(&closes, &volumes);
        assert_eq!(vwap[0], Some(10.0));
        assert_eq!(vwap[1], Some(15.0));
        assert_eq!(vwap[3], Some(25.0));
    }

    #[test]
    fn test_avwap_weights_by_volume() {
        let closes = vec![10.0, 20.0];
        let volumes = vec![1.0, 3.0];
        let vwap = anchored_vwap_series(&closes, &volumes);
        assert_eq!(vwap[1], Some(17.5));
    }

    #[test]
    fn test_avwap_undefined_until_volume_appears() {
        let closes = vec![10.0, 20.0, 30.0];
        let volumes = vec![0.0, 0.0, 100.0];
        let vwap = anchored_vwap_series(&closes, &volumes);
        assert_eq!(vwap[0], None);
        assert_eq!(vwap[1], None);
        assert_eq!(vwap[2], Some(30.0));
    }

    #[test]
    fn test_avwap_never_resets() {
        // A heavy early print keeps pulling on the average forever
        let closes = vec![100.0, 10.0, 10.0, 10.0];
        let volumes = vec![1_000_000.0, 1.0, 1.0, 1.0];
        let vwap = anchored_vwap_series(&closes, &volumes);
        assert!(vwap[3].unwrap() > 99.0);
    }
}
