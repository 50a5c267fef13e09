use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AccountError;
use crate::model::employee::Employee;

pub mod memory;
pub mod mysql;

/// Fully-resolved row handed to the store: email already normalized,
/// password already hashed, flags and hire date already defaulted by the
/// factory.
#[derive(Debug, Clone)]
pub struct InsertEmployee {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub password: String,
}

/// Persistence seam for employee accounts.
///
/// Implementations own id assignment and enforce email uniqueness,
/// reporting a violation as [`AccountError::DuplicateEmail`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persists a new employee and returns it with its assigned id.
    async fn insert(&self, record: InsertEmployee) -> Result<Employee, AccountError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AccountError>;

    /// Writes back every mutable column of an existing employee.
    /// [`AccountError::NotFound`] if the id is unknown to the store.
    async fn save(&self, employee: &Employee) -> Result<(), AccountError>;
}

#[async_trait]
impl<T: EmployeeRepository + ?Sized> EmployeeRepository for std::sync::Arc<T> {
    async fn insert(&self, record: InsertEmployee) -> Result<Employee, AccountError> {
        (**self).insert(record).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AccountError> {
        (**self).find_by_email(email).await
    }

    async fn save(&self, employee: &Employee) -> Result<(), AccountError> {
        (**self).save(employee).await
    }
}
