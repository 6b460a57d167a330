/// CPI value of the index's reference period
pub const BASE_CPI: f64 = 100.0;

/// Converts a real (base-period) price into a nominal price for a year whose
/// index value is `cpi`.
pub fn adjust_for_inflation(real_price: f64, cpi: f64) -> f64 {
    real_price * (cpi / BASE_CPI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_scales_by_cpi_ratio() {
        assert_eq!(adjust_for_inflation(500_000.0, 105.0), 525_000.0);
    }

    #[test]
    fn test_base_cpi_is_identity() {
        for price in [0.0, 1.0, 123_456.78, 500_000.0, 1_250_000.0] {
            assert_eq!(adjust_for_inflation(price, BASE_CPI), price);
        }
    }

    #[test]
    fn test_monotonic_in_cpi() {
        let price = 450_000.0;
        let mut previous = adjust_for_inflation(price, 1.0);
        for step in 1..=400 {
            let cpi = 1.0 + step as f64 * 0.5;
            let current = adjust_for_inflation(price, cpi);
            assert!(current >= previous, "cpi {} decreased the price", cpi);
            previous = current;
        }
    }

    #[test]
    fn test_matches_closed_form() {
        let cases = [(320_000.0, 98.4), (610_500.0, 131.25), (75_000.0, 250.0)];
        for (price, cpi) in cases {
            let expected = price * cpi / 100.0;
            assert!((adjust_for_inflation(price, cpi) - expected).abs() < 1e-6);
        }
    }
}
