//! Core data models for the payslip engine.
//!
//! This module contains all the domain records consumed by document
//! generation, with explicit validation at the boundary.

mod company;
mod employee;
mod pay_period;
mod payroll;

pub use company::Company;
pub use employee::Employee;
pub use pay_period::{PayPeriod, month_name_es};
pub use payroll::{PayItem, PayTotals, PayrollRecord};

use crate::error::{PayrollError, PayrollResult};

/// Fails with `InvalidRecord` when a required string field is empty.
pub(crate) fn require(record: &str, field: &str, value: &str) -> PayrollResult<()> {
    if value.trim().is_empty() {
        return Err(PayrollError::InvalidRecord {
            record: record.to_string(),
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_non_empty_value() {
        assert!(require("company", "rut", "76.543.210-K").is_ok());
    }

    #[test]
    fn test_require_rejects_empty_value() {
        let result = require("company", "rut", "");
        match result.unwrap_err() {
            PayrollError::InvalidRecord { record, field, .. } => {
                assert_eq!(record, "company");
                assert_eq!(field, "rut");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_require_rejects_whitespace_only_value() {
        assert!(require("employee", "nombre", "   ").is_err());
    }
}
