// Output formatting — the ranking report and profile displays.

pub mod terminal;

/// Format a score the way a default-configured C++ output stream prints a
/// double: 6 significant digits, trailing zeros removed, and scientific
/// notation when the decimal exponent is below -4 or at least 6.
pub fn format_score(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Round to the target precision first: the exponent must come from the
    // rounded value (0.9999996 prints as 1, not 1.00000e-01).
    let sci = format!("{:.prec$e}", value, prec = (PRECISION - 1) as usize);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_fixed() {
        assert_eq!(format_score(4.0 / 6.0), "0.666667");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(0.123456789), "0.123457");
        assert_eq!(format_score(0.0001), "0.0001");
    }

    #[test]
    fn test_format_score_rounding_carries_into_exponent() {
        assert_eq!(format_score(0.9999996), "1");
        assert_eq!(format_score(0.000099999999), "0.0001");
    }

    #[test]
    fn test_format_score_scientific() {
        assert_eq!(format_score(0.00001234), "1.234e-05");
        assert_eq!(format_score(2.5e-7), "2.5e-07");
        assert_eq!(format_score(1234567.0), "1.23457e+06");
    }
}
