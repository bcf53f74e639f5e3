use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::{ApiKeyConfig, ServerConfig};
use crate::db::Database;

/// Privilege tier of a caller. Ordered so that a higher role satisfies any
/// requirement met by a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Anonymous,
    User,
    Admin,
}

/// The identity attached to a request by the caller-identification
/// middleware.
#[derive(Debug, Clone)]
pub struct Caller {
    pub name: Option<String>,
    pub role: Role,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self {
            name: None,
            role: Role::Anonymous,
        }
    }
}

/// A configured API key, indexed by the SHA-256 hex digest of its token.
#[derive(Debug, Clone)]
pub struct Credential {
    pub name: String,
    pub role: Role,
}

pub struct AppState {
    /// Store backing every resource
    pub db: Database,
    /// Known API keys, keyed by lowercase hex token digest
    pub credentials: HashMap<String, Credential>,
}

impl AppState {
    pub fn new(db: Database, config: &ServerConfig) -> Self {
        Self::with_api_keys(db, &config.api_keys)
    }

    pub fn with_api_keys(db: Database, api_keys: &[ApiKeyConfig]) -> Self {
        let credentials = api_keys
            .iter()
            .map(|key| {
                (
                    key.token_sha256.to_ascii_lowercase(),
                    Credential {
                        name: key.name.clone(),
                        role: key.role,
                    },
                )
            })
            .collect();

        Self { db, credentials }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(Role::Admin > Role::User);
        assert!(Role::User > Role::Anonymous);
    }

    #[test]
    fn test_role_names() {
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    }
}
