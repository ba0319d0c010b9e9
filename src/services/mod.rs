pub mod budget;
pub mod csv_parser;
pub mod date_range;
pub mod income;
pub mod recommendations;
pub mod report;
pub mod savings;

/// Round a monetary value to cents, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2_half_away_from_zero() {
        // 0.125 and 0.375 are exact in binary, so the .5 cent case is real
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_round2_repeating_fraction() {
        assert_eq!(round2(2000.0 / 3.0), 666.67);
        assert_eq!(round2(200.0), 200.0);
    }
}
