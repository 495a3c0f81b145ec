pub mod bar;
pub mod line;

pub use bar::*;
pub use line::*;

/// Pixel dimensions shared by all charts
pub(crate) const CHART_SIZE: (u32, u32) = (1200, 600);

/// Y-axis range with headroom beyond the extremes; always spans zero so
/// bars anchored at the baseline stay visible, including negative totals
/// such as refund-only views
pub(crate) fn padded_range(values: &[f64]) -> std::ops::Range<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let min = values.iter().cloned().fold(0.0_f64, f64::min);
    let upper = if max <= 0.0 { 1.0 } else { max * 1.1 };
    let lower = if min >= 0.0 { 0.0 } else { min * 1.1 };
    lower..upper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(&[]), 0.0..1.0);
        assert_eq!(padded_range(&[0.0]), 0.0..1.0);

        let positive = padded_range(&[10.0, 50.0]);
        assert_eq!(positive.start, 0.0);
        assert!((positive.end - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range_covers_negative_values() {
        let refunds = padded_range(&[-30.0, -10.0]);
        assert!((refunds.start - -33.0).abs() < 1e-9);
        assert_eq!(refunds.end, 1.0);

        let mixed = padded_range(&[-20.0, 40.0]);
        assert!((mixed.start - -22.0).abs() < 1e-9);
        assert!((mixed.end - 44.0).abs() < 1e-9);
    }
}
