//! Display formatting for dashboards

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a dollar amount with two decimal places
///
/// Rounds midpoints away from zero, matching how the backend rounds
/// charges.
///
/// # Examples
///
/// ```
/// use reef_admin::utils::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1250, 2)), "$12.50");
/// assert_eq!(format_currency(Decimal::new(100, 0)), "$100.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Format a ratio as a percentage with one decimal place
///
/// # Examples
///
/// ```
/// use reef_admin::utils::format::format_percent;
///
/// assert_eq!(format_percent(0.125), "12.5%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_rounds_to_cents() {
        assert_eq!(format_currency(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_currency(Decimal::new(12341, 3)), "$12.34");
    }

    #[test]
    fn test_percent_whole() {
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
