//! Payroll record models.
//!
//! This module contains the [`PayrollRecord`] type that associates one
//! employee with one company for one pay period, along with its line
//! items and derived totals. Records are immutable once built and are
//! consumed only for rendering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::{PayPeriod, require};

/// A single earnings or deduction line item.
///
/// Amounts are whole Chilean pesos; negative amounts are invalid
/// wherever they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayItem {
    /// Human-readable label, e.g. "Sueldo base".
    pub label: String,
    /// The amount in pesos.
    pub amount: Decimal,
}

/// Derived sums over a payroll record's line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Sum of all earnings (total haberes).
    pub total_earnings: Decimal,
    /// Sum of all deductions (total descuentos).
    pub total_deductions: Decimal,
    /// Earnings minus deductions (líquido a pagar).
    pub net_pay: Decimal,
}

/// Represents one employee's payroll for one pay period.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayItem, PayPeriod, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     employee_id: "tr-0001".to_string(),
///     company_id: "emp-andina".to_string(),
///     period: PayPeriod { year: 2026, month: 7 },
///     earnings: vec![
///         PayItem { label: "Sueldo base".to_string(), amount: Decimal::from(1000) },
///         PayItem { label: "Bono".to_string(), amount: Decimal::from(500) },
///     ],
///     deductions: vec![
///         PayItem { label: "AFP".to_string(), amount: Decimal::from(200) },
///     ],
/// };
/// assert_eq!(record.totals().net_pay, Decimal::from(1300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier of the employee this payroll belongs to.
    pub employee_id: String,
    /// Identifier of the paying company.
    pub company_id: String,
    /// The pay period this record settles.
    pub period: PayPeriod,
    /// Earnings line items (haberes).
    pub earnings: Vec<PayItem>,
    /// Deduction line items (descuentos).
    pub deductions: Vec<PayItem>,
}

impl PayrollRecord {
    /// Sum of all earnings.
    pub fn total_earnings(&self) -> Decimal {
        self.earnings.iter().map(|item| item.amount).sum()
    }

    /// Sum of all deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().map(|item| item.amount).sum()
    }

    /// Derived totals: earnings, deductions, and net pay.
    pub fn totals(&self) -> PayTotals {
        let total_earnings = self.total_earnings();
        let total_deductions = self.total_deductions();
        PayTotals {
            total_earnings,
            total_deductions,
            net_pay: total_earnings - total_deductions,
        }
    }

    /// Validates identifiers, the period, and every line item.
    ///
    /// A negative amount fails with `InvalidAmount` naming the item; it
    /// is never coerced to zero.
    pub fn validate(&self) -> PayrollResult<()> {
        require("payroll", "employee_id", &self.employee_id)?;
        require("payroll", "company_id", &self.company_id)?;
        self.period.validate()?;

        for item in self.earnings.iter().chain(self.deductions.iter()) {
            require("payroll", "label", &item.label)?;
            if item.amount.is_sign_negative() {
                return Err(PayrollError::InvalidAmount {
                    label: item.label.clone(),
                    amount: item.amount,
                });
            }
        }
        Ok(())
    }
}
