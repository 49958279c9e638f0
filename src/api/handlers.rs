//! HTTP request handlers for the payslip engine API.
//!
//! Each document request fetches its source records from the store,
//! runs the corresponding builder, and returns the artifact or a typed
//! error body. Nothing is persisted.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::build_payslip;
use crate::error::PayrollResult;
use crate::models::PayPeriod;
use crate::template::{SigningInfo, seniority_certificate};

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/payslips/:company_id/:employee_id/:period",
            get(payslip_handler),
        )
        .route(
            "/certificates/seniority/:company_id/:employee_id",
            get(certificate_handler),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /payslips/:company_id/:employee_id/:period.
///
/// Returns the payslip PDF for the addressed payroll record.
async fn payslip_handler(
    State(state): State<AppState>,
    Path((company_id, employee_id, period)): Path<(String, String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        company_id = %company_id,
        employee_id = %employee_id,
        period = %period,
        "Processing payslip request"
    );

    let period: PayPeriod = match period.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match fetch_and_build_payslip(&state, &company_id, &employee_id, period).await {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                bytes = bytes.len(),
                "Payslip generated"
            );
            let disposition = format!(
                "attachment; filename=\"liquidacion_{}_{}.pdf\"",
                employee_id, period
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Fetches the three source records and runs the document builder.
async fn fetch_and_build_payslip(
    state: &AppState,
    company_id: &str,
    employee_id: &str,
    period: PayPeriod,
) -> PayrollResult<Vec<u8>> {
    let company = state.store().fetch_company(company_id).await?;
    let employee = state.store().fetch_employee(employee_id).await?;
    let payroll = state.store().fetch_payroll(employee_id, period).await?;

    build_payslip(&company, &employee, &payroll)
}

/// Query parameters for the seniority certificate endpoint.
#[derive(Debug, Deserialize)]
struct CertificateQuery {
    /// City for the signature line; defaults to the company's city.
    ciudad: Option<String>,
    /// Signing date; defaults to today.
    fecha: Option<NaiveDate>,
}

/// Handler for GET /certificates/seniority/:company_id/:employee_id.
///
/// Returns the seniority certificate as plain text.
async fn certificate_handler(
    State(state): State<AppState>,
    Path((company_id, employee_id)): Path<(String, String)>,
    Query(query): Query<CertificateQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        company_id = %company_id,
        employee_id = %employee_id,
        "Processing certificate request"
    );

    match fetch_and_render_certificate(&state, &company_id, &employee_id, query).await {
        Ok(text) => {
            info!(correlation_id = %correlation_id, "Certificate generated");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Certificate request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn fetch_and_render_certificate(
    state: &AppState,
    company_id: &str,
    employee_id: &str,
    query: CertificateQuery,
) -> PayrollResult<String> {
    let company = state.store().fetch_company(company_id).await?;
    let employee = state.store().fetch_employee(employee_id).await?;

    let signing = SigningInfo {
        ciudad: query.ciudad.unwrap_or_else(|| company.ciudad.clone()),
        fecha: query.fecha.unwrap_or_else(|| Utc::now().date_naive()),
    };

    seniority_certificate(&company, &employee, &signing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::models::{Company, Employee, PayItem, PayrollRecord};
    use crate::store::MemoryStore;

    fn create_test_state() -> AppState {
        let company = Company {
            id: "emp-andina".to_string(),
            razon_social: "Comercial Andina SpA".to_string(),
            rut: "76.543.210-K".to_string(),
            direccion: "Av. Providencia 1234".to_string(),
            ciudad: "Santiago".to_string(),
        };
        let employee = Employee {
            id: "tr-0001".to_string(),
            company_id: "emp-andina".to_string(),
            nombre: "Ana María Rojas Fuentes".to_string(),
            rut: "12.345.678-9".to_string(),
            cargo: "Analista Contable".to_string(),
            fecha_ingreso: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
        };
        let payroll = PayrollRecord {
            employee_id: "tr-0001".to_string(),
            company_id: "emp-andina".to_string(),
            period: PayPeriod { year: 2026, month: 7 },
            earnings: vec![PayItem {
                label: "Sueldo base".to_string(),
                amount: Decimal::from(950_000),
            }],
            deductions: vec![PayItem {
                label: "AFP (10%)".to_string(),
                amount: Decimal::from(95_000),
            }],
        };

        let store = MemoryStore::from_records(vec![company], vec![employee], vec![payroll]);
        AppState::new(Arc::new(store))
    }

    async fn get_response(uri: &str) -> axum::response::Response {
        let router = create_router(create_test_state());
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_payslip_returns_pdf() {
        let response = get_response("/payslips/emp-andina/tr-0001/2026-07").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/pdf");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_payslip_sets_filename() {
        let response = get_response("/payslips/emp-andina/tr-0001/2026-07").await;
        let disposition = response.headers().get("content-disposition").unwrap();
        assert_eq!(
            disposition,
            "attachment; filename=\"liquidacion_tr-0001_2026-07.pdf\""
        );
    }

    #[tokio::test]
    async fn test_payslip_unknown_employee_returns_404() {
        let response = get_response("/payslips/emp-andina/tr-9999/2026-07").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_payslip_unknown_period_returns_404() {
        let response = get_response("/payslips/emp-andina/tr-0001/2026-08").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_payslip_malformed_period_returns_400() {
        let response = get_response("/payslips/emp-andina/tr-0001/julio-2026").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: crate::api::ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_certificate_returns_text() {
        let response =
            get_response("/certificates/seniority/emp-andina/tr-0001?fecha=2026-07-15").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/plain; charset=utf-8");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Ana María Rojas Fuentes"));
        assert!(text.contains("Santiago, 15 de julio de 2026."));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_certificate_ciudad_override() {
        let response = get_response(
            "/certificates/seniority/emp-andina/tr-0001?ciudad=Valpara%C3%ADso&fecha=2026-07-15",
        )
        .await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Valparaíso, 15 de julio de 2026."));
    }

    #[tokio::test]
    async fn test_certificate_unknown_company_returns_404() {
        let response = get_response("/certificates/seniority/emp-999/tr-0001").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
