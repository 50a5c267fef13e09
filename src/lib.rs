//! Employee account model for an authentication subsystem.
//!
//! This crate owns the employee identity record and its construction rules:
//! normalized emails, argon2-hashed passwords, and the active/staff/admin
//! authorization flags. Persistence goes through the [`EmployeeRepository`]
//! seam (a MySQL implementation and an in-memory one are provided), and
//! password hashing through the [`CredentialHasher`] seam, so the domain
//! types stay free of storage and crypto concerns.
//!
//! HTTP surfaces, sessions, and permission policies live elsewhere; this is
//! the record and its factory only.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod manager;
pub mod model;
pub mod repo;

pub use auth::password::{Argon2Hasher, CredentialHasher};
pub use error::AccountError;
pub use manager::EmployeeManager;
pub use model::employee::{CredentialHolder, Employee, NewEmployee, PermissionHolder};
pub use repo::{EmployeeRepository, InsertEmployee};
