use std::str::FromStr;

use rust_decimal::Decimal;

use crate::util::basic::SError;

// These were deprecated as methods on Decimal, so re-implement them.
// Those implementations don't actually do zero checks, and can result
// in weird behaviour.
pub fn is_positive(d: &Decimal) -> bool {
    d.is_sign_positive() && !d.is_zero()
}

pub fn is_negative(d: &Decimal) -> bool {
    d.is_sign_negative() && !d.is_zero()
}

pub fn parse_decimal(value: &str, field_name: &str) -> Result<Decimal, SError> {
    Decimal::from_str(value).map_err(|e| {
        format!("Failed to parse number for {} ('{}'): {}", field_name, value, e)
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{is_negative, is_positive, parse_decimal};

    #[test]
    fn test_sign_checks() {
        assert!(is_positive(&dec!(0.01)));
        assert!(!is_positive(&dec!(0)));
        assert!(!is_positive(&dec!(-1)));

        assert!(is_negative(&dec!(-0.01)));
        assert!(!is_negative(&dec!(0)));
        assert!(!is_negative(&dec!(1)));

        // -0 must not register as negative.
        let mut neg_zero = dec!(0);
        neg_zero.set_sign_negative(true);
        assert!(!is_negative(&neg_zero));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("-1000.50", "Proceeds").unwrap(), dec!(-1000.50));
        // Scale is preserved, so rendering round-trips exactly.
        assert_eq!(
            parse_decimal("123.4500", "Quantity").unwrap().to_string(),
            "123.4500"
        );

        let err = parse_decimal("bla", "Quantity").unwrap_err();
        assert_eq!(
            err,
            "Failed to parse number for Quantity ('bla'): Invalid decimal: \
             unknown character"
        );
        // Grouped digits are not valid decimals in the export.
        assert!(parse_decimal("1,000", "Amount").is_err());
    }
}
