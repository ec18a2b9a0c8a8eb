//! Operator accounts and credential checking
//!
//! The portal serves a small fixed set of operator accounts configured once
//! at process start. Passwords are compared as plain values - a carried-over
//! limitation of the original tool, flagged in the README rather than fixed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Role attached to an operator account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Admin,
}

impl Role {
    /// Whether this role may mutate the client collection
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated identity attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

/// One configured operator account
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Immutable credential table, built once at startup
#[derive(Debug, Clone)]
pub struct CredentialTable {
    accounts: Vec<Account>,
}

impl CredentialTable {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Build the table from environment variables, with the original
    /// local-development defaults.
    pub fn from_env() -> Self {
        let viewer = Account {
            username: env_or("BOOMOPS_VIEWER_USER", "viewer"),
            password: env_or("BOOMOPS_VIEWER_PASS", "viewer123"),
            role: Role::Viewer,
        };
        let admin = Account {
            username: env_or("BOOMOPS_ADMIN_USER", "admin"),
            password: env_or("BOOMOPS_ADMIN_PASS", "admin123"),
            role: Role::Admin,
        };
        Self::new(vec![viewer, admin])
    }

    /// Check a username/password pair against the table.
    ///
    /// Fails on unknown username or password mismatch. No lockout, no rate
    /// limiting, no hashing.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        let account = self.accounts.iter().find(|a| a.username == username);

        match account {
            Some(account) if account.password == password => {
                debug!("User authenticated: {}", username);
                Some(Principal {
                    username: account.username.clone(),
                    role: account.role,
                })
            }
            Some(_) => {
                warn!("Invalid password for user: {}", username);
                None
            }
            None => {
                warn!("Unknown user: {}", username);
                None
            }
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CredentialTable {
        CredentialTable::new(vec![
            Account {
                username: "viewer".to_string(),
                password: "viewer123".to_string(),
                role: Role::Viewer,
            },
            Account {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                role: Role::Admin,
            },
        ])
    }

    #[test]
    fn authenticates_known_accounts() {
        let table = table();

        let viewer = table.authenticate("viewer", "viewer123").unwrap();
        assert_eq!(viewer.username, "viewer");
        assert_eq!(viewer.role, Role::Viewer);
        assert!(!viewer.role.is_admin());

        let admin = table.authenticate("admin", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.role.is_admin());
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(table().authenticate("admin", "wrong").is_none());
    }

    #[test]
    fn rejects_unknown_user() {
        assert!(table().authenticate("nobody", "admin123").is_none());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Viewer).unwrap(), "\"viewer\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn principal_serializes_to_username_and_role() {
        let principal = Principal {
            username: "admin".to_string(),
            role: Role::Admin,
        };
        let value = serde_json::to_value(&principal).unwrap();
        assert_eq!(value["username"], "admin");
        assert_eq!(value["role"], "admin");
    }
}
