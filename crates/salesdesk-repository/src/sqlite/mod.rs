//! SQLite repository implementations.

pub mod department_repository;
pub mod seller_repository;

pub use department_repository::SqliteDepartmentRepository;
pub use seller_repository::SqliteSellerRepository;

/// Message surfaced when a write unexpectedly touches no rows.
pub(crate) const NO_ROWS_AFFECTED: &str = "Unexpected error: no rows affected";
