//! # SalesDesk Repository
//!
//! Data access for SalesDesk entities over SQLx.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn DepartmentRepository> / Arc<dyn SellerRepository>
//! SqliteDepartmentRepository / SqliteSellerRepository  (SQLx)
//!   ↓
//! SQLite
//! ```
//!
//! The repository traits in [`traits`] are the seam the service layer
//! depends on; the [`sqlite`] module holds the store-specific
//! implementations. Every write runs in its own transaction.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
