//! In-memory record store.
//!
//! Loads the record collections from YAML files in a data directory at
//! process start and serves lookups from maps. Records are validated
//! when consumed (at document build), not at load.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Company, Employee, PayPeriod, PayrollRecord};

use super::RecordStore;

#[derive(Debug, Deserialize)]
struct CompaniesFile {
    companies: Vec<Company>,
}

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct PayrollsFile {
    payrolls: Vec<PayrollRecord>,
}

/// A [`RecordStore`] backed by in-memory maps.
///
/// # Directory Structure
///
/// ```text
/// data/demo/
/// ├── companies.yaml
/// ├── employees.yaml
/// └── payrolls.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::store::MemoryStore;
///
/// let store = MemoryStore::load("./data/demo")?;
/// # Ok::<(), payslip_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    companies: HashMap<String, Company>,
    employees: HashMap<String, Employee>,
    payrolls: HashMap<(String, PayPeriod), PayrollRecord>,
}

impl MemoryStore {
    /// Builds a store from already-loaded records.
    pub fn from_records(
        companies: Vec<Company>,
        employees: Vec<Employee>,
        payrolls: Vec<PayrollRecord>,
    ) -> Self {
        Self {
            companies: companies.into_iter().map(|c| (c.id.clone(), c)).collect(),
            employees: employees.into_iter().map(|e| (e.id.clone(), e)).collect(),
            payrolls: payrolls
                .into_iter()
                .map(|p| ((p.employee_id.clone(), p.period), p))
                .collect(),
        }
    }

    /// Loads the record collections from YAML files in `dir`.
    ///
    /// Fails with `ConfigNotFound` when a collection file is missing and
    /// `ConfigParse` when one contains invalid YAML.
    pub fn load<P: AsRef<Path>>(dir: P) -> PayrollResult<Self> {
        let dir = dir.as_ref();

        let companies: CompaniesFile = load_yaml(&dir.join("companies.yaml"))?;
        let employees: EmployeesFile = load_yaml(&dir.join("employees.yaml"))?;
        let payrolls: PayrollsFile = load_yaml(&dir.join("payrolls.yaml"))?;

        Ok(Self::from_records(
            companies.companies,
            employees.employees,
            payrolls.payrolls,
        ))
    }

    /// Number of payroll records held by the store.
    pub fn payroll_count(&self) -> usize {
        self.payrolls.len()
    }
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> PayrollResult<T> {
    let path_str = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParse {
        path: path_str,
        message: e.to_string(),
    })
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_company(&self, id: &str) -> PayrollResult<Company> {
        self.companies
            .get(id)
            .cloned()
            .ok_or_else(|| PayrollError::RecordNotFound {
                kind: "company".to_string(),
                id: id.to_string(),
            })
    }

    async fn fetch_employee(&self, id: &str) -> PayrollResult<Employee> {
        self.employees
            .get(id)
            .cloned()
            .ok_or_else(|| PayrollError::RecordNotFound {
                kind: "employee".to_string(),
                id: id.to_string(),
            })
    }

    async fn fetch_payroll(
        &self,
        employee_id: &str,
        period: PayPeriod,
    ) -> PayrollResult<PayrollRecord> {
        self.payrolls
            .get(&(employee_id.to_string(), period))
            .cloned()
            .ok_or_else(|| PayrollError::RecordNotFound {
                kind: "payroll".to_string(),
                id: format!("{} {}", employee_id, period),
            })
    }
}
