//! Number formatting for prices and quantities.

/// Formats a number with a thousands separator (`,`) and a fixed number of decimals.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole yen, e.g. `¥1,234`
pub fn format_yen(value: f64) -> String {
    format!("¥{}", format_number_with_decimals(value, 0))
}

/// Yen with two decimals, e.g. `¥0.50` for unit prices
pub fn format_yen_precise(value: f64) -> String {
    format!("¥{}", format_number_with_decimals(value, 2))
}

/// Suggested selling prices are always rounded up to the next yen.
pub fn format_yen_ceil(value: f64) -> String {
    format_yen(value.ceil())
}

/// Quantities keep their own precision: `1000`, `12.5`
pub fn format_quantity(value: f64) -> String {
    let s = format!("{}", value);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Value of an `<input type="number">`; `None` when empty or not a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Optional numeric field: empty input means "not set", garbage is an error.
pub fn parse_optional_number(raw: &str) -> Result<Option<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(raw)
        .map(Some)
        .ok_or_else(|| format!("数値ではありません: {}", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_yen() {
        assert_eq!(format_yen(185000.0), "¥185,000");
        assert_eq!(format_yen_precise(0.5), "¥0.50");
        assert_eq!(format_yen_ceil(241.01), "¥242");
        assert_eq!(format_yen_ceil(240.0), "¥240");
    }

    #[test]
    fn test_quantity() {
        assert_eq!(format_quantity(1000.0), "1000");
        assert_eq!(format_quantity(12.5), "12.5");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1200 "), Some(1200.0));
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_optional_number(""), Ok(None));
        assert_eq!(parse_optional_number("480"), Ok(Some(480.0)));
        assert!(parse_optional_number("abc").is_err());
    }
}
