//! MySQL-backed employee store.
//!
//! Expects an `employees` table shaped like:
//!
//! ```sql
//! CREATE TABLE employees (
//!     emp_id     BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     email      VARCHAR(255) NOT NULL UNIQUE,
//!     first_name VARCHAR(64)  NOT NULL,
//!     last_name  VARCHAR(64)  NOT NULL,
//!     hire_date  DATE NOT NULL,
//!     birth_date DATE NOT NULL,
//!     is_active  BOOLEAN NOT NULL DEFAULT TRUE,
//!     is_admin   BOOLEAN NOT NULL DEFAULT FALSE,
//!     is_staff   BOOLEAN NOT NULL DEFAULT FALSE,
//!     password   VARCHAR(255) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::AccountError;
use crate::model::employee::Employee;
use crate::repo::{EmployeeRepository, InsertEmployee};

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// SQLSTATE 23000 covers both duplicate-key and not-null violations on
/// MySQL; only the unique email constraint can trip it on this table's
/// insert path with a fully-populated record.
fn map_db_err(e: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code() == Some("23000".into()) {
            return AccountError::DuplicateEmail;
        }
    }

    AccountError::Database(e)
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn insert(&self, record: InsertEmployee) -> Result<Employee, AccountError> {
        debug!(email = %record.email, "inserting employee");

        let result = sqlx::query(
            r#"
            INSERT INTO employees
            (email, first_name, last_name, hire_date, birth_date, is_active, is_admin, is_staff, password)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.email)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(record.hire_date)
        .bind(record.birth_date)
        .bind(record.is_active)
        .bind(record.is_admin)
        .bind(record.is_staff)
        .bind(&record.password)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(Employee {
            emp_id: result.last_insert_id(),
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            hire_date: record.hire_date,
            birth_date: record.birth_date,
            is_active: record.is_active,
            is_admin: record.is_admin,
            is_staff: record.is_staff,
            password: record.password,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AccountError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT emp_id, email, first_name, last_name, hire_date, birth_date,
                   is_active, is_admin, is_staff, password
            FROM employees
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn save(&self, employee: &Employee) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET email = ?, first_name = ?, last_name = ?, hire_date = ?, birth_date = ?,
                is_active = ?, is_admin = ?, is_staff = ?, password = ?
            WHERE emp_id = ?
            "#,
        )
        .bind(&employee.email)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.hire_date)
        .bind(employee.birth_date)
        .bind(employee.is_active)
        .bind(employee.is_admin)
        .bind(employee.is_staff)
        .bind(&employee.password)
        .bind(employee.emp_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound);
        }

        Ok(())
    }
}
