//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! payslips and certificates are generated by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;

use super::require;

/// Represents an employee of a company.
///
/// # Example
///
/// ```
/// use payslip_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "tr-0001".to_string(),
///     company_id: "emp-andina".to_string(),
///     nombre: "Ana María Rojas Fuentes".to_string(),
///     rut: "12.345.678-9".to_string(),
///     cargo: "Analista Contable".to_string(),
///     fecha_ingreso: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
/// };
/// assert!(employee.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Identifier of the employing company.
    pub company_id: String,
    /// Full name of the employee.
    pub nombre: String,
    /// The employee RUT, as a formatted string.
    pub rut: String,
    /// The position (cargo) the employee holds.
    pub cargo: String,
    /// The date the employee started employment.
    pub fecha_ingreso: NaiveDate,
}

impl Employee {
    /// Validates that all required fields are present.
    pub fn validate(&self) -> PayrollResult<()> {
        require("employee", "id", &self.id)?;
        require("employee", "company_id", &self.company_id)?;
        require("employee", "nombre", &self.nombre)?;
        require("employee", "rut", &self.rut)?;
        require("employee", "cargo", &self.cargo)?;
        Ok(())
    }
}
