//! Chilean peso formatting.
//!
//! The peso has no fractional units on payroll documents: amounts round
//! half-to-even to whole pesos in exactly one place (here), so printed
//! line items always reconcile with printed totals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole pesos, half-to-even.
///
/// # Example
///
/// ```
/// use payslip_engine::document::round_clp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234.5").unwrap();
/// assert_eq!(round_clp(amount), Decimal::from(1234));
/// ```
pub fn round_clp(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount as Chilean pesos: `$` prefix, `.` thousands
/// separator, no fractional part.
///
/// # Example
///
/// ```
/// use payslip_engine::document::format_clp;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_clp(Decimal::from(1234567)), "$1.234.567");
/// ```
pub fn format_clp(amount: Decimal) -> String {
    let rounded = round_clp(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
