//! In-process employee store with the same uniqueness and id-assignment
//! semantics as the MySQL one. Backs the crate's tests and is handy for
//! embedding without a database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::AccountError;
use crate::model::employee::Employee;
use crate::repo::{EmployeeRepository, InsertEmployee};

#[derive(Default)]
struct Inner {
    next_id: u64,
    rows: HashMap<u64, Employee>,
}

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    inner: RwLock<Inner>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.inner.read().unwrap().rows.len()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn insert(&self, record: InsertEmployee) -> Result<Employee, AccountError> {
        let mut inner = self.inner.write().unwrap();

        if inner.rows.values().any(|e| e.email == record.email) {
            return Err(AccountError::DuplicateEmail);
        }

        inner.next_id += 1;
        let employee = Employee {
            emp_id: inner.next_id,
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            hire_date: record.hire_date,
            birth_date: record.birth_date,
            is_active: record.is_active,
            is_admin: record.is_admin,
            is_staff: record.is_staff,
            password: record.password,
        };
        inner.rows.insert(employee.emp_id, employee.clone());

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AccountError> {
        let inner = self.inner.read().unwrap();

        Ok(inner.rows.values().find(|e| e.email == email).cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<(), AccountError> {
        let mut inner = self.inner.write().unwrap();

        if inner
            .rows
            .values()
            .any(|e| e.email == employee.email && e.emp_id != employee.emp_id)
        {
            return Err(AccountError::DuplicateEmail);
        }

        match inner.rows.get_mut(&employee.emp_id) {
            Some(row) => {
                *row = employee.clone();
                Ok(())
            }
            None => Err(AccountError::NotFound),
        }
    }
}
