//! Pay period model.
//!
//! Remuneraciones are settled monthly, so a pay period is one calendar
//! month identified as `YYYY-MM`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Returns the Spanish name of a month (1-12), or an empty string
/// outside that range.
pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "",
    }
}

/// Represents one monthly pay period.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
///
/// let period: PayPeriod = "2026-07".parse().unwrap();
/// assert_eq!(period.year, 2026);
/// assert_eq!(period.month, 7);
/// assert_eq!(period.to_string(), "2026-07");
/// assert_eq!(period.display_es(), "julio 2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl PayPeriod {
    /// Validates that the month is within 1-12.
    pub fn validate(&self) -> PayrollResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(PayrollError::InvalidRecord {
                record: "pay_period".to_string(),
                field: "month".to_string(),
                message: format!("month {} is out of range 1-12", self.month),
            });
        }
        Ok(())
    }

    /// Returns the Spanish long form, e.g. "julio 2026".
    pub fn display_es(&self) -> String {
        format!("{} {}", month_name_es(self.month), self.year)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayPeriod {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PayrollError::InvalidPeriod {
            value: s.to_string(),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(PayPeriod { year, month })
    }
}
