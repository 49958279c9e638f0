//! Seniority certificate generation.
//!
//! The certificate template ships with the crate and is filled from
//! validated company and employee records plus a signature block.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::PayrollResult;
use crate::models::{Company, Employee, month_name_es};

use super::render;

/// The seniority certificate (certificado de antigüedad) template.
pub const SENIORITY_CERTIFICATE_TEMPLATE: &str =
    include_str!("../../templates/certificado_antiguedad.txt");

/// Where and when the certificate is signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningInfo {
    /// The city named in the signature line.
    pub ciudad: String,
    /// The signing date.
    pub fecha: NaiveDate,
}

/// Formats a date the way certificates spell it out, e.g.
/// "01 de marzo de 2019".
fn format_fecha_es(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{:02} de {} de {}",
        date.day(),
        month_name_es(date.month()),
        date.year()
    )
}

/// Builds the flat field mapping the certificate template consumes.
fn certificate_fields(
    company: &Company,
    employee: &Employee,
    signing: &SigningInfo,
) -> HashMap<String, String> {
    use chrono::Datelike;

    HashMap::from([
        (
            "razon_social_empresa".to_string(),
            company.razon_social.clone(),
        ),
        ("rut_empresa".to_string(), company.rut.clone()),
        ("nombre_trabajador".to_string(), employee.nombre.clone()),
        ("rut_trabajador".to_string(), employee.rut.clone()),
        (
            "fecha_ingreso".to_string(),
            format_fecha_es(employee.fecha_ingreso),
        ),
        ("cargo".to_string(), employee.cargo.clone()),
        ("ciudad_firma".to_string(), signing.ciudad.clone()),
        (
            "dia_firma".to_string(),
            format!("{:02}", signing.fecha.day()),
        ),
        (
            "mes_firma".to_string(),
            month_name_es(signing.fecha.month()).to_string(),
        ),
        ("ano_firma".to_string(), signing.fecha.year().to_string()),
    ])
}

/// Renders the seniority certificate for an employee.
///
/// Both records are validated first; the output is plain text with every
/// placeholder substituted.
pub fn seniority_certificate(
    company: &Company,
    employee: &Employee,
    signing: &SigningInfo,
) -> PayrollResult<String> {
    company.validate()?;
    employee.validate()?;

    let fields = certificate_fields(company, employee, signing);
    render(SENIORITY_CERTIFICATE_TEMPLATE, &fields)
}
