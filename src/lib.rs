//! Payslip generation engine for Chilean payroll (remuneraciones).
//!
//! This crate generates payroll documents on demand: payslip PDFs
//! (liquidaciones de sueldo) and plain-text seniority certificates
//! (certificados de antigüedad), backed by an external record store and
//! exposed over an HTTP boundary. A companion one-shot tool administers
//! role claims on the auth service.

#![warn(missing_docs)]

pub mod admin;
pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod store;
pub mod template;
