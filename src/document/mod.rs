//! Payslip document generation.
//!
//! This module lays out the payslip PDF (liquidación de sueldo) and
//! formats monetary amounts with the conventions of the domain.

mod format;
mod payslip;

pub use format::{format_clp, round_clp};
pub use payslip::build_payslip;
