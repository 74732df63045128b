//! Linear rescaling between closed integer ranges.

/// Map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
///
/// Rounds to the nearest integer with ties away from zero, then clamps into
/// the output range. A degenerate range on either side returns `out_lo`
/// unconditionally. Bounds are unsigned and may be given in either order;
/// only absolute differences are used.
pub(crate) fn scale(value: u64, in_lo: u64, in_hi: u64, out_lo: u64, out_hi: u64) -> u64 {
    if out_lo == out_hi || in_lo == in_hi {
        return out_lo;
    }

    let ratio = value.abs_diff(in_lo) as f64 / in_hi.abs_diff(in_lo) as f64;
    let scaled = (out_lo as f64 + out_hi.abs_diff(out_lo) as f64 * ratio).round();

    (scaled as u64).clamp(out_lo, out_hi)
}

#[cfg(test)]
mod tests {
    use super::scale;

    #[test]
    fn endpoints_map_to_endpoints() {
        assert_eq!(scale(0, 0, 31, 1, 12), 1);
        assert_eq!(scale(31, 0, 31, 1, 12), 12);
        assert_eq!(scale(0, 0, u64::MAX, 0, 127), 0);
        assert_eq!(scale(u64::MAX, 0, u64::MAX, 0, 127), 127);
    }

    #[test]
    fn interior_values_round_to_nearest() {
        // 1 + 11 * 5 / 31 = 2.77.. -> 3
        assert_eq!(scale(5, 0, 31, 1, 12), 3);
        // 127 * 1 / 3 = 42.33.. -> 42
        assert_eq!(scale(1, 0, 3, 0, 127), 42);
        // 127 * 2 / 3 = 84.66.. -> 85
        assert_eq!(scale(2, 0, 3, 0, 127), 85);
        // Ties round away from zero: 9 * 1 / 2 = 4.5 -> 5
        assert_eq!(scale(1, 0, 2, 0, 9), 5);
    }

    #[test]
    fn degenerate_ranges_return_out_lo() {
        assert_eq!(scale(7, 3, 3, 10, 20), 10);
        assert_eq!(scale(7, 0, 15, 4, 4), 4);
    }

    #[test]
    fn never_escapes_output_range() {
        for v in 0..=255u64 {
            let out = scale(v, 0, 255, 3, 18);
            assert!((3..=18).contains(&out));
        }
    }
}
