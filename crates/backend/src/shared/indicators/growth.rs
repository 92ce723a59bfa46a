/// Relative change of `current` against `last`: `current / last - 1`.
///
/// `None` when there is no comparison: `last` absent or zero, or any other
/// non-finite ratio.
pub fn growth(current: f64, last: Option<f64>) -> Option<f64> {
    let last = last?;
    let ratio = current / last - 1.0;
    ratio.is_finite().then_some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_defined_for_nonzero_last() {
        let samples = [(180.0, 180.0), (150.0, 100.0), (0.0, 40.0), (25.0, -50.0), (1e-3, 3.0)];
        for (current, last) in samples {
            let g = growth(current, Some(last)).unwrap();
            assert!((g - (current / last - 1.0)).abs() < 1e-12);
        }
        assert_eq!(growth(180.0, Some(180.0)), Some(0.0));
    }

    #[test]
    fn test_growth_undefined_without_comparison() {
        assert_eq!(growth(10.0, None), None);
        assert_eq!(growth(10.0, Some(0.0)), None);
        assert_eq!(growth(0.0, Some(0.0)), None);
        assert_eq!(growth(-5.0, Some(0.0)), None);
    }
}
