//! Authentication surface
//!
//! Identity itself lives in the external provider; this module only decides
//! two things locally: which email a typed username resolves to, and whether
//! a logged-in email is the restricted viewer. The restricted account can
//! only see the summary view, nothing else.

use std::collections::HashMap;

/// Access role of a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full access to invoices and reports
    Admin,
    /// Summary view only
    RestrictedViewer,
}

impl Role {
    /// Whether this role may manage invoices and open the full reports
    pub fn has_full_access(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Username aliases and the restricted-viewer assignment
#[derive(Debug, Clone)]
pub struct AuthDirectory {
    restricted_email: String,
    aliases: HashMap<String, String>,
}

impl AuthDirectory {
    /// Builds the directory for the configured restricted email. The login
    /// form accepts the short username "valeria" for that account.
    pub fn new(restricted_email: impl Into<String>) -> Self {
        let restricted_email = restricted_email.into();
        let aliases =
            HashMap::from([("valeria".to_string(), restricted_email.clone())]);
        Self {
            restricted_email,
            aliases,
        }
    }

    /// Converts what the user typed (email or username) into the login
    /// email the identity provider expects
    pub fn to_login_email(&self, typed: &str) -> String {
        let value = typed.trim();
        if value.contains('@') {
            return value.to_string();
        }
        self.aliases
            .get(&value.to_lowercase())
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }

    /// Role for a logged-in email; the restriction applies only to the one
    /// configured account
    pub fn role_for(&self, email: Option<&str>) -> Role {
        match email {
            Some(e) if e == self.restricted_email => Role::RestrictedViewer,
            _ => Role::Admin,
        }
    }

    /// Returns true when the email belongs to the restricted account
    pub fn is_restricted(&self, email: Option<&str>) -> bool {
        self.role_for(email) == Role::RestrictedViewer
    }
}
