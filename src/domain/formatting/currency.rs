//! Compact UK currency rendering for advert amounts.
//!
//! Amounts are whole pounds. Below a million the full grouped figure is
//! shown; from a million upwards the figure compacts to millions, billions,
//! or trillions with at most two fraction digits, trailing zeros trimmed.
//! Negative amounts render in parentheses rather than with a minus sign.

const MILLION: u128 = 1_000_000;
const BILLION: u128 = 1_000_000_000;
const TRILLION: u128 = 1_000_000_000_000;

/// Formats an optional amount; `None` renders as the empty string.
pub fn format_optional_pounds(amount: Option<i64>) -> String {
    amount.map(format_compact_pounds).unwrap_or_default()
}

/// Formats a whole-pound amount in compact UK style.
///
/// `1000` → `"£1,000"`, `1500000` → `"£1.5 million"`,
/// `-2750000000000` → `"(£2.75 trillion)"`.
pub fn format_compact_pounds(amount: i64) -> String {
    let magnitude = amount.unsigned_abs() as u128;

    let body = if magnitude >= TRILLION {
        format!("£{} trillion", scale(magnitude, TRILLION))
    } else if magnitude >= BILLION {
        format!("£{} billion", scale(magnitude, BILLION))
    } else if magnitude >= MILLION {
        format!("£{} million", scale(magnitude, MILLION))
    } else {
        format!("£{}", group_thousands(magnitude))
    };

    if amount < 0 {
        format!("({})", body)
    } else {
        body
    }
}

/// Divides `magnitude` by `unit`, rounded half-up to two decimal places,
/// with trailing fraction zeros trimmed.
fn scale(magnitude: u128, unit: u128) -> String {
    let hundredths = (magnitude * 100 + unit / 2) / unit;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if fraction == 0 {
        whole.to_string()
    } else if fraction % 10 == 0 {
        format!("{}.{}", whole, fraction / 10)
    } else {
        format!("{}.{:02}", whole, fraction)
    }
}

/// Renders an unsigned integer with comma thousands separators.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_renders_as_plain_pound_zero() {
        assert_eq!(format_compact_pounds(0), "£0");
    }

    #[test]
    fn sub_million_amounts_group_thousands() {
        assert_eq!(format_compact_pounds(1), "£1");
        assert_eq!(format_compact_pounds(999), "£999");
        assert_eq!(format_compact_pounds(1000), "£1,000");
        assert_eq!(format_compact_pounds(500_000), "£500,000");
        assert_eq!(format_compact_pounds(999_999), "£999,999");
    }

    #[test]
    fn millions_compact_with_trimmed_fractions() {
        assert_eq!(format_compact_pounds(1_000_000), "£1 million");
        assert_eq!(format_compact_pounds(1_500_000), "£1.5 million");
        assert_eq!(format_compact_pounds(1_250_000), "£1.25 million");
        assert_eq!(format_compact_pounds(1_333_333), "£1.33 million");
        assert_eq!(format_compact_pounds(500_000_000), "£500 million");
    }

    #[test]
    fn billions_and_trillions_compact() {
        assert_eq!(format_compact_pounds(1_000_000_000), "£1 billion");
        assert_eq!(format_compact_pounds(10_000_000_000), "£10 billion");
        assert_eq!(format_compact_pounds(1_000_000_000_000), "£1 trillion");
        assert_eq!(format_compact_pounds(2_750_000_000_000), "£2.75 trillion");
    }

    #[test]
    fn negative_amounts_wrap_in_parentheses() {
        assert_eq!(format_compact_pounds(-1), "(£1)");
        assert_eq!(format_compact_pounds(-1_000_000), "(£1 million)");
        assert_eq!(format_compact_pounds(-10_000_000_000), "(£10 billion)");
        assert_eq!(format_compact_pounds(-2_750_000_000_000), "(£2.75 trillion)");
    }

    #[test]
    fn absent_amount_renders_empty() {
        assert_eq!(format_optional_pounds(None), "");
        assert_eq!(format_optional_pounds(Some(1_500_000)), "£1.5 million");
    }

    proptest! {
        #[test]
        fn parentheses_iff_negative(amount in i64::MIN + 1..=i64::MAX) {
            let rendered = format_compact_pounds(amount);
            prop_assert_eq!(amount < 0, rendered.starts_with('('));
            prop_assert_eq!(amount < 0, rendered.ends_with(')'));
        }

        #[test]
        fn negation_only_adds_parentheses(amount in 1..=i64::MAX) {
            let positive = format_compact_pounds(amount);
            let negative = format_compact_pounds(-amount);
            prop_assert_eq!(format!("({})", positive), negative);
        }
    }
}
