//! Conversion engine
//!
//! Pure functions only: text in, text out. Anything that cannot be read as
//! a finite number is treated as zero instead of being reported.

use crate::constants::DEFAULT_RESULT;
use crate::types::ConversionDirection;
use rust_decimal::{Decimal, RoundingStrategy};

/// Read a user-typed amount, falling back to 0.0 for empty or malformed text
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format to two decimals, rounding half away from zero.
///
/// Rounding works on the shortest decimal form of `value` (what `Display`
/// prints), so `2.675` becomes `2.68` even though the nearest f64 is
/// slightly below it.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return DEFAULT_RESULT.to_string();
    }

    let decimal = match value.to_string().parse::<Decimal>() {
        Ok(decimal) => decimal,
        // Outside Decimal's range
        Err(_) => return format!("{:.2}", value),
    };

    let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    // 27+ integer digits leave no room in the mantissa for two decimals,
    // and rescale silently settles for a smaller scale.
    if rounded.scale() != 2 {
        return format!("{:.2}", value);
    }
    rounded.to_string()
}

/// Convert `input` in the direction's source currency to its target currency
pub fn convert(input: &str, direction: ConversionDirection) -> String {
    let amount = parse_amount(input);
    format_amount(amount * direction.rate())
}

/// Result line shown under the convert button
pub fn result_label(result: &str, direction: ConversionDirection) -> String {
    match direction {
        ConversionDirection::EurToUsd => {
            format!("Result: {}{}", direction.target().symbol(), result)
        }
        ConversionDirection::UsdToEur => {
            format!("Result: {}{}", result, direction.target().symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", ConversionDirection::EurToUsd, "111.00")]
    #[case("100", ConversionDirection::UsdToEur, "90.09")]
    #[case("", ConversionDirection::EurToUsd, "0.00")]
    #[case("", ConversionDirection::UsdToEur, "0.00")]
    #[case("abc", ConversionDirection::EurToUsd, "0.00")]
    #[case("abc", ConversionDirection::UsdToEur, "0.00")]
    #[case("0", ConversionDirection::EurToUsd, "0.00")]
    #[case("0", ConversionDirection::UsdToEur, "0.00")]
    #[case("1", ConversionDirection::EurToUsd, "1.11")]
    #[case("12.5", ConversionDirection::EurToUsd, "13.88")]
    #[case("  100  ", ConversionDirection::EurToUsd, "111.00")]
    #[case("1e3", ConversionDirection::EurToUsd, "1110.00")]
    fn converts_known_amounts(
        #[case] input: &str,
        #[case] direction: ConversionDirection,
        #[case] expected: &str,
    ) {
        assert_eq!(convert(input, direction), expected);
    }

    #[rstest]
    #[case("1,5")]
    #[case("12abc")]
    #[case("1.2.3")]
    #[case(".")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-infinity")]
    fn malformed_input_becomes_zero(#[case] input: &str) {
        assert_eq!(parse_amount(input), 0.0);
        for direction in ConversionDirection::ALL {
            assert_eq!(convert(input, direction), "0.00");
        }
    }

    #[rstest]
    #[case(0.125, "0.13")]
    #[case(2.675, "2.68")]
    #[case(1.005, "1.01")]
    #[case(0.004, "0.00")]
    #[case(-0.004, "0.00")]
    #[case(-1.235, "-1.24")]
    #[case(42.0, "42.00")]
    #[case(1234567.891, "1234567.89")]
    fn rounds_half_away_from_zero(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(convert("-0", ConversionDirection::EurToUsd), "0.00");
    }

    #[rstest]
    #[case(1e26)]
    #[case(1e27)]
    #[case(5e27)]
    #[case(7e28)]
    #[case(1e30)]
    #[case(-1e27)]
    fn huge_values_keep_two_decimals(#[case] value: f64) {
        let formatted = format_amount(value);
        assert!(!formatted.contains('e'), "{}", formatted);
        let (_, decimals) = formatted
            .split_once('.')
            .unwrap_or_else(|| panic!("no decimal point in {}", formatted));
        assert_eq!(decimals.len(), 2, "{}", formatted);
    }

    #[test]
    fn huge_typed_amount_keeps_two_decimals() {
        let result = convert("1e27", ConversionDirection::EurToUsd);
        assert_eq!(result.split_once('.').map(|(_, d)| d.len()), Some(2));
    }

    #[test]
    fn matches_direct_multiplication() {
        for x in [0.5, 3.0, 19.99, 250.0, 1000.01, 73.4] {
            let text = x.to_string();
            assert_eq!(
                convert(&text, ConversionDirection::EurToUsd),
                format_amount(x * 1.11)
            );
            assert_eq!(
                convert(&text, ConversionDirection::UsdToEur),
                format_amount(x / 1.11)
            );
        }
    }

    #[test]
    fn round_trip_recovers_amount() {
        for x in [1.0, 7.5, 100.0, 123.45, 9999.99] {
            let usd = convert(&x.to_string(), ConversionDirection::EurToUsd);
            let eur = convert(&usd, ConversionDirection::UsdToEur);
            let back = parse_amount(&eur);
            assert!((back - x).abs() <= 0.01 + 1e-9, "{} -> {} -> {}", x, usd, eur);
        }
        let usd = convert("100", ConversionDirection::EurToUsd);
        assert_eq!(convert(&usd, ConversionDirection::UsdToEur), "100.00");
    }

    #[test]
    fn result_label_places_symbol_by_direction() {
        assert_eq!(
            result_label("111.00", ConversionDirection::EurToUsd),
            "Result: $111.00"
        );
        assert_eq!(
            result_label("90.09", ConversionDirection::UsdToEur),
            "Result: 90.09€"
        );
    }
}
