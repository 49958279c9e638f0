//! Role claim administration.
//!
//! The auth service holds user accounts and their role claims; this
//! module is the client the one-shot `set-role` tool uses to update
//! them. The client is built from explicit [`AuthConfig`], never from
//! ambient process state.

use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::{PayrollError, PayrollResult};

/// Application roles carried as custom claims on user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Accountant access (libros, honorarios, remuneraciones).
    Contador,
    /// Employee self-service access.
    Trabajador,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Contador => "contador",
            Role::Trabajador => "trabajador",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Role {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "contador" => Ok(Role::Contador),
            "trabajador" => Ok(Role::Trabajador),
            other => Err(PayrollError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct RoleClaim {
    role: Role,
}

/// Client for the auth service admin API.
pub struct AdminClient {
    client: Client,
    base_url: String,
    service_token: String,
}

impl AdminClient {
    /// Creates a client from explicit auth settings.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_token: config.service_token.clone(),
        }
    }

    /// Sets the role claim on a user account.
    ///
    /// Fails with `RoleUpdate` when the auth service is unreachable or
    /// answers with a non-success status.
    pub async fn set_role(&self, uid: &str, role: Role) -> PayrollResult<()> {
        let url = format!("{}/users/{}/claims", self.base_url, uid);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_token)
            .json(&RoleClaim { role })
            .send()
            .await
            .map_err(|e| PayrollError::RoleUpdate {
                uid: uid.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PayrollError::RoleUpdate {
                uid: uid.to_string(),
                message: format!("auth service returned {}: {}", status, body),
            });
        }

        Ok(())
    }
}
