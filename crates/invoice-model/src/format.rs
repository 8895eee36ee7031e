//! Amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals and comma thousands separators.
///
/// ```
/// use invoice_model::{Decimal, format_amount};
///
/// assert_eq!(format_amount(Decimal::from(8000)), "8,000.00");
/// assert_eq!(format_amount(Decimal::new(-12345678, 3)), "-12,345.68");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let mut fraction = fraction.to_string();
    while fraction.len() < 2 {
        fraction.push('0');
    }

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// [`format_amount`] prefixed with a currency symbol.
pub fn format_money(symbol: &str, value: Decimal) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(positive) => format!("-{symbol}{positive}"),
        None => format!("{symbol}{amount}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_groups() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(Decimal::new(5, 1)), "0.50");
        assert_eq!(format_amount(Decimal::from(999)), "999.00");
        assert_eq!(format_amount(Decimal::from(1000)), "1,000.00");
        assert_eq!(format_amount(Decimal::from(1_234_567)), "1,234,567.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(1005, 3)), "1.01");
        assert_eq!(format_amount(Decimal::new(-4, 3)), "0.00");
    }

    #[test]
    fn money_places_sign_before_symbol() {
        assert_eq!(format_money("$", Decimal::from(1500)), "$1,500.00");
        assert_eq!(format_money("$", Decimal::from(-20)), "-$20.00");
    }
}
