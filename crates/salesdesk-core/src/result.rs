//! Result type aliases for SalesDesk.

use crate::SalesDeskError;

/// A specialized `Result` type for SalesDesk operations.
pub type SalesDeskResult<T> = Result<T, SalesDeskError>;
