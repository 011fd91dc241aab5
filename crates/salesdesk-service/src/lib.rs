//! # SalesDesk Service
//!
//! Business services for SalesDesk. A service is a thin façade over a
//! repository: it routes save-or-update by the presence of an id and
//! adds nothing beyond what the form layer already validated.

pub mod department_service;
pub mod dto;
pub mod seller_service;

pub use department_service::{DepartmentService, DepartmentServiceImpl};
pub use dto::*;
pub use seller_service::{SellerService, SellerServiceImpl};
