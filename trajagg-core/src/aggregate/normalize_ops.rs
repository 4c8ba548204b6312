/// linearly maps `value` from `[in_lo, in_hi]` into `[out_lo, out_hi]`.
///
/// when the input range is degenerate (`in_hi == in_lo`) the midpoint of the
/// output range is returned.
pub fn normalize(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    if in_hi == in_lo {
        return (out_lo + out_hi) / 2.0;
    }
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn test_degenerate_range_is_midpoint() {
        for x in [-3.0, 0.0, 5.0, 1e9] {
            assert_eq!(normalize(x, 5.0, 5.0, 0.0, 1.0), 0.5);
        }
        assert_eq!(normalize(1.0, 1.0, 1.0, 2.0, 9.0), 5.5);
    }

    #[test]
    fn test_linear_rescale() {
        assert_eq!(normalize(1.0, 1.0, 11.0, 2.0, 9.0), 2.0);
        assert_eq!(normalize(11.0, 1.0, 11.0, 2.0, 9.0), 9.0);
        assert_eq!(normalize(6.0, 1.0, 11.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_extrapolates_outside_range() {
        assert_eq!(normalize(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
        assert_eq!(normalize(5.0, 0.0, 10.0, 1.0, 0.0), 0.5);
    }
}
