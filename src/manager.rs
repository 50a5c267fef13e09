use chrono::Local;
use tracing::{debug, info, instrument};

use crate::auth::password::CredentialHasher;
use crate::error::AccountError;
use crate::model::employee::{Employee, NewEmployee};
use crate::repo::{EmployeeRepository, InsertEmployee};

/// Manager for employee accounts.
///
/// Every account, admin or not, is built through [`create_employee`]
/// (`create_admin` delegates to it), so normalization and hashing cannot
/// be bypassed. Persistence and hashing are injected seams.
///
/// [`create_employee`]: EmployeeManager::create_employee
pub struct EmployeeManager<R, H> {
    repo: R,
    hasher: H,
}

impl<R, H> EmployeeManager<R, H>
where
    R: EmployeeRepository,
    H: CredentialHasher,
{
    pub fn new(repo: R, hasher: H) -> Self {
        Self { repo, hasher }
    }

    /// Lowercases the domain part of the address, leaving the local part
    /// untouched. An address without `@` is only trimmed.
    fn normalize_email(email: &str) -> String {
        let email = email.trim();

        match email.rsplit_once('@') {
            Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
            None => email.to_string(),
        }
    }

    /// Creates a new employee.
    ///
    /// The email is validated and normalized, the password hashed and the
    /// record persisted. Uniqueness is left to the store's constraint;
    /// duplicates come back as [`AccountError::DuplicateEmail`].
    #[instrument(name = "create_employee", skip_all, fields(email = %new.email))]
    pub async fn create_employee(
        &self,
        new: NewEmployee,
        password: &str,
    ) -> Result<Employee, AccountError> {
        if new.email.trim().is_empty() {
            info!("validation failed: empty email");
            return Err(AccountError::EmptyEmail);
        }

        let email = Self::normalize_email(&new.email);
        let hashed = self.hasher.hash(password)?;

        let employee = self
            .repo
            .insert(InsertEmployee {
                email,
                first_name: new.first_name,
                last_name: new.last_name,
                hire_date: new.hire_date.unwrap_or_else(|| Local::now().date_naive()),
                birth_date: new.birth_date,
                is_active: true,
                is_admin: false,
                is_staff: false,
                password: hashed,
            })
            .await?;

        info!(emp_id = employee.emp_id, "employee created");

        Ok(employee)
    }

    /// Creates a new admin account: a regular employee with the admin and
    /// staff flags raised and saved back.
    #[instrument(name = "create_admin", skip_all, fields(email = %new.email))]
    pub async fn create_admin(
        &self,
        new: NewEmployee,
        password: &str,
    ) -> Result<Employee, AccountError> {
        let mut employee = self.create_employee(new, password).await?;

        employee.is_admin = true;
        employee.is_staff = true;
        self.repo.save(&employee).await?;

        info!(emp_id = employee.emp_id, "employee promoted to admin");

        Ok(employee)
    }

    /// Checks a login attempt against the stored hash.
    ///
    /// Unknown email, wrong password and deactivated account all come back
    /// as `Ok(None)` so callers cannot tell them apart.
    #[instrument(name = "authenticate", skip_all, fields(email = %email))]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Employee>, AccountError> {
        let email = Self::normalize_email(email);

        let Some(employee) = self.repo.find_by_email(&email).await? else {
            debug!("authentication failed: unknown email");
            return Ok(None);
        };

        if !self.hasher.verify(password, &employee.password)? {
            info!("authentication failed: password mismatch");
            return Ok(None);
        }

        if !employee.is_active {
            info!("authentication failed: account deactivated");
            return Ok(None);
        }

        Ok(Some(employee))
    }

    /// Looks up an employee by (normalized) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AccountError> {
        self.repo.find_by_email(&Self::normalize_email(email)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::Argon2Hasher;
    use crate::repo::memory::MemoryEmployeeRepository;
    use chrono::NaiveDate;

    fn manager() -> EmployeeManager<MemoryEmployeeRepository, Argon2Hasher> {
        EmployeeManager::new(MemoryEmployeeRepository::new(), Argon2Hasher)
    }

    fn jane(email: &str) -> NewEmployee {
        NewEmployee {
            email: email.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            hire_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_employee_hashes_password_and_normalizes_email() {
        let mgr = manager();
        let emp = mgr
            .create_employee(jane("  Jane.Doe@EXAMPLE.Com "), "secret123")
            .await
            .unwrap();

        // local part case preserved, domain lowercased
        assert_eq!(emp.email, "Jane.Doe@example.com");
        assert_ne!(emp.password, "secret123");
        assert!(emp.is_active);
        assert!(!emp.is_admin);
        assert!(!emp.is_staff);
        assert!(emp.emp_id > 0);
    }

    #[tokio::test]
    async fn create_employee_rejects_empty_email_without_persisting() {
        let repo = std::sync::Arc::new(MemoryEmployeeRepository::new());
        let mgr = EmployeeManager::new(repo.clone(), Argon2Hasher);

        let result = mgr.create_employee(jane("   "), "secret123").await;
        assert!(matches!(result, Err(AccountError::EmptyEmail)));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn duplicate_email_fails_on_second_create() {
        let mgr = manager();
        mgr.create_employee(jane("jane@example.com"), "secret123")
            .await
            .unwrap();

        // same address after normalization
        let result = mgr.create_employee(jane("jane@EXAMPLE.COM"), "other").await;
        assert!(matches!(result, Err(AccountError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn create_admin_raises_and_persists_both_flags() {
        let mgr = manager();
        let emp = mgr
            .create_admin(jane("admin@example.com"), "secret123")
            .await
            .unwrap();

        assert!(emp.is_admin);
        assert!(emp.is_staff);

        let stored = mgr.find_by_email("admin@example.com").await.unwrap().unwrap();
        assert!(stored.is_admin);
        assert!(stored.is_staff);
    }

    #[tokio::test]
    async fn hire_date_defaults_to_today() {
        let mgr = manager();
        let mut new = jane("jane@example.com");
        new.hire_date = None;

        let emp = mgr.create_employee(new, "secret123").await.unwrap();
        assert_eq!(emp.hire_date, Local::now().date_naive());
    }

    #[tokio::test]
    async fn authenticate_accepts_the_original_password() {
        let mgr = manager();
        mgr.create_employee(jane("jane@example.com"), "secret123")
            .await
            .unwrap();

        let emp = mgr
            .authenticate("jane@EXAMPLE.com", "secret123")
            .await
            .unwrap();
        assert_eq!(emp.unwrap().email, "jane@example.com");
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password_and_unknown_email() {
        let mgr = manager();
        mgr.create_employee(jane("jane@example.com"), "secret123")
            .await
            .unwrap();

        assert!(mgr
            .authenticate("jane@example.com", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(mgr
            .authenticate("nobody@example.com", "secret123")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn authenticate_rejects_deactivated_account() {
        let repo = MemoryEmployeeRepository::new();
        let mgr = EmployeeManager::new(repo, Argon2Hasher);
        let mut emp = mgr
            .create_employee(jane("jane@example.com"), "secret123")
            .await
            .unwrap();

        emp.is_active = false;
        mgr.repo.save(&emp).await.unwrap();

        assert!(mgr
            .authenticate("jane@example.com", "secret123")
            .await
            .unwrap()
            .is_none());
    }
}
