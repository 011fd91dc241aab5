//! Common test infrastructure for database integration tests.

use chrono::NaiveDate;
use salesdesk_config::DatabaseConfig;
use salesdesk_core::{Department, Seller};
use salesdesk_repository::DatabasePool;
use std::sync::Arc;

/// Test database wrapper.
///
/// Opens a fresh in-memory SQLite database per test and applies the
/// schema, so tests never touch each other's data.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new in-memory test database with migrations applied.
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 5,
            create_if_missing: true,
        };

        let pool = DatabasePool::connect(&config)
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a handle to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        self.pool.clone()
    }
}

/// Builds a transient department with the given name.
#[allow(dead_code)]
pub fn create_test_department(name: &str) -> Department {
    Department::new(name)
}

/// Builds a transient seller attached to `department`.
#[allow(dead_code)]
pub fn create_test_seller(name: &str, department: Department) -> Seller {
    Seller::new(
        name,
        format!("{}@example.com", name.to_lowercase()),
        NaiveDate::from_ymd_opt(1990, 4, 21).expect("valid date"),
        2500.0,
        department,
    )
}
