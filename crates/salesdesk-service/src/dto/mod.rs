//! Form bindings between raw presentation input and domain entities.

pub mod department_dto;
pub mod seller_dto;

pub use department_dto::DepartmentForm;
pub use seller_dto::SellerForm;
