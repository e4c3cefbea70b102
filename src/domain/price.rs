/// Significant digits used when printing money.
const PRICE_PRECISION: i32 = 6;

/// Formats a price the way a default-configured C++ `ostream` does: six
/// significant digits, trailing zeros dropped, and scientific notation for
/// exponents below -4 or at least six (`0.3`, `20`, `1.23457e+06`).
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponent after rounding to the target precision, so 999999.5 moves up
    // to 1e+06 just as printf's %g does.
    let scientific = format!("{:.*e}", (PRICE_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= PRICE_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRICE_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation_drops_trailing_zeros() {
        assert_eq!(format_price(20.0), "20");
        assert_eq!(format_price(49.5), "49.5");
        assert_eq!(format_price(999.99), "999.99");
        assert_eq!(format_price(0.0001), "0.0001");
        assert_eq!(format_price(-2.5), "-2.5");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        assert_eq!(format_price(0.1 + 0.2), "0.3");
        assert_eq!(format_price(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_large_and_tiny_values_use_exponent() {
        assert_eq!(format_price(1234567.0), "1.23457e+06");
        assert_eq!(format_price(999999.5), "1e+06");
        assert_eq!(format_price(123456.0), "123456");
        assert_eq!(format_price(0.00001234), "1.234e-05");
    }
}
