use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Database model for employees.
///
/// The email doubles as the login name. `password` only ever holds the
/// argon2 hash produced by [`crate::auth::password::CredentialHasher`] and
/// is skipped when the record is serialized out.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub emp_id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Employee {
    /// Returns employee's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns employee's full name, same as [`Employee::full_name`].
    /// The upstream model answered both accessors with the full name and
    /// callers grew to rely on it, so the alias is kept.
    pub fn short_name(&self) -> String {
        self.full_name()
    }
}

/// Human-readable label for admin tooling and logs.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// Login-identifier side of the account, consumed by the surrounding
/// authentication machinery.
pub trait CredentialHolder {
    fn login_id(&self) -> &str;
    fn password_hash(&self) -> &str;
}

/// Authorization flags of the account.
pub trait PermissionHolder {
    fn is_active(&self) -> bool;
    fn is_staff(&self) -> bool;
    fn is_admin(&self) -> bool;
}

impl CredentialHolder for Employee {
    fn login_id(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password
    }
}

impl PermissionHolder for Employee {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_staff(&self) -> bool {
        self.is_staff
    }

    fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// Creation payload handed to [`crate::manager::EmployeeManager`].
///
/// `hire_date` falls back to today when absent, matching the column
/// default. The password travels separately so this type can be logged
/// and serialized freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: Option<NaiveDate>,
    pub birth_date: NaiveDate,
}
