//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in template rendering, document building,
//! record fetching, and configuration loading.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payslip engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::PayrollError;
///
/// let error = PayrollError::MissingField {
///     placeholder: "rut_empresa".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Template placeholder 'rut_empresa' has no matching field"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A template placeholder had no corresponding field value.
    #[error("Template placeholder '{placeholder}' has no matching field")]
    MissingField {
        /// The placeholder identifier that was not found.
        placeholder: String,
    },

    /// A `{{` was opened but never closed before the end of the template.
    #[error("Unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder {
        /// Byte offset of the opening `{{`.
        position: usize,
    },

    /// A record failed boundary validation.
    #[error("Invalid {record} field '{field}': {message}")]
    InvalidRecord {
        /// The kind of record (e.g., "company", "employee").
        record: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay item carried an amount that is not permitted.
    #[error("Invalid amount for '{label}': {amount}")]
    InvalidAmount {
        /// The label of the offending pay item.
        label: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// Document layout or serialization failed.
    #[error("Document build failed: {message}")]
    DocumentBuild {
        /// A description of the build failure.
        message: String,
    },

    /// A record was not found in the record store.
    #[error("Record not found: {kind} '{id}'")]
    RecordNotFound {
        /// The kind of record ("company", "employee", "payroll").
        kind: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// The record store failed while fetching.
    #[error("Record store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },

    /// A pay period string could not be parsed.
    #[error("Invalid pay period '{value}', expected YYYY-MM")]
    InvalidPeriod {
        /// The value that failed to parse.
        value: String,
    },

    /// A role name was not recognized.
    #[error("Unknown role: {value}")]
    UnknownRole {
        /// The unrecognized role name.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The auth service rejected a role claim update.
    #[error("Failed to set role for user '{uid}': {message}")]
    RoleUpdate {
        /// The user identifier whose claim was being set.
        uid: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
