//! Record store seam.
//!
//! The payroll records live in a managed document database operated
//! elsewhere; the engine only ever fetches from it. [`RecordStore`] is
//! the seam for that collaborator, and [`MemoryStore`] is the in-crate
//! implementation backing the demo deployment and the tests.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::PayrollResult;
use crate::models::{Company, Employee, PayPeriod, PayrollRecord};

/// Read access to the payroll record collections.
///
/// Fetch failures propagate to the caller; the engine performs no
/// retries. A missing record fails with `RecordNotFound`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches a company by id.
    async fn fetch_company(&self, id: &str) -> PayrollResult<Company>;

    /// Fetches an employee by id.
    async fn fetch_employee(&self, id: &str) -> PayrollResult<Employee>;

    /// Fetches the payroll record of an employee for a pay period.
    async fn fetch_payroll(
        &self,
        employee_id: &str,
        period: PayPeriod,
    ) -> PayrollResult<PayrollRecord>;
}
