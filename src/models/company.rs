//! Company model.

use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;

use super::require;

/// Represents an employer company.
///
/// The RUT is treated as an opaque formatted string; the engine never
/// computes or verifies the check digit.
///
/// # Example
///
/// ```
/// use payslip_engine::models::Company;
///
/// let company = Company {
///     id: "emp-andina".to_string(),
///     razon_social: "Comercial Andina SpA".to_string(),
///     rut: "76.543.210-K".to_string(),
///     direccion: "Av. Providencia 1234".to_string(),
///     ciudad: "Santiago".to_string(),
/// };
/// assert!(company.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: String,
    /// The legal name (razón social) of the company.
    pub razon_social: String,
    /// The company RUT, as a formatted string.
    pub rut: String,
    /// Street address of the company.
    pub direccion: String,
    /// City where the company is registered.
    pub ciudad: String,
}

impl Company {
    /// Validates that all required fields are present.
    ///
    /// Fails with `InvalidRecord` naming the first offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        require("company", "id", &self.id)?;
        require("company", "razon_social", &self.razon_social)?;
        require("company", "rut", &self.rut)?;
        Ok(())
    }
}
