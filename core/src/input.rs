use crate::error::ValidationError;
use crate::model::entry::Fuel;

/// Parses a quantity the way the form accepts it: surrounding whitespace and
/// single `_` separators between digits are allowed. `None` when not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !trimmed.contains('_') {
        return trimmed.parse().ok();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut cleaned = String::with_capacity(trimmed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            match (prev, next) {
                (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        cleaned.push(c);
    }
    cleaned.parse().ok()
}

/// Parses one form field. Surrounding whitespace is ignored for the check only.
pub fn parse_quantity(fuel: Fuel, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(fuel));
    }

    let value = parse_number(trimmed).ok_or_else(|| ValidationError::NotNumeric {
        field: fuel,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            field: fuel,
            value: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: fuel,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Checks a diesel/gas/hfo triple. Missing fields are reported before bad numbers.
pub fn validate_quantities(diesel: &str, gas: &str, hfo: &str) -> Result<(), ValidationError> {
    let fields = [(Fuel::Diesel, diesel), (Fuel::Gas, gas), (Fuel::Hfo, hfo)];

    if let Some((fuel, _)) = fields.iter().find(|(_, raw)| raw.trim().is_empty()) {
        return Err(ValidationError::MissingField(*fuel));
    }

    for (fuel, raw) in fields {
        parse_quantity(fuel, raw)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(Fuel::Diesel, "10").unwrap(), 10.0);
        assert_eq!(parse_quantity(Fuel::Gas, " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_quantity(Fuel::Hfo, "0").unwrap(), 0.0);

        assert_eq!(
            parse_quantity(Fuel::Gas, "abc"),
            Err(ValidationError::NotNumeric { field: Fuel::Gas, value: "abc".to_string() })
        );
        assert_eq!(parse_quantity(Fuel::Hfo, ""), Err(ValidationError::MissingField(Fuel::Hfo)));
        assert!(matches!(parse_quantity(Fuel::Diesel, "-1"), Err(ValidationError::Negative { .. })));
        assert!(matches!(parse_quantity(Fuel::Diesel, "NaN"), Err(ValidationError::NotNumeric { .. })));
        assert!(matches!(parse_quantity(Fuel::Diesel, "inf"), Err(ValidationError::NotNumeric { .. })));
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number(" 1_000.5 "), Some(1000.5));
        assert_eq!(parse_number("1_0_0"), Some(100.0));
        assert_eq!(parse_number("_1000"), None);
        assert_eq!(parse_number("1000_"), None);
        assert_eq!(parse_number("1__000"), None);
        assert_eq!(parse_number("1_.5"), None);
        assert_eq!(parse_quantity(Fuel::Diesel, "2_500").unwrap(), 2500.0);
    }

    #[test]
    fn test_missing_reported_first() {
        // gas is bad but hfo is empty; the empty field wins.
        assert_eq!(
            validate_quantities("10", "abc", ""),
            Err(ValidationError::MissingField(Fuel::Hfo))
        );
        assert!(validate_quantities("10", "20", "5").is_ok());
    }
}
