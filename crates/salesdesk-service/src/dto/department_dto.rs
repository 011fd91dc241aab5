//! Department form binding.

use salesdesk_core::{
    add_required, non_blank, validation_errors_to_error, Department, DepartmentId, SalesDeskResult,
};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Raw form input for creating or editing a department.
///
/// Every scalar arrives as text straight off the form; nothing is
/// checked until submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentForm {
    /// Identifier of the department being edited, absent on create.
    pub id: Option<i64>,

    /// Name as typed.
    pub name: Option<String>,
}

impl DepartmentForm {
    /// Checks the form and builds the entity it describes.
    ///
    /// All violated fields are collected before the form is rejected.
    pub fn into_department(self) -> SalesDeskResult<Department> {
        let mut errors = ValidationErrors::new();

        let name = non_blank(self.name.as_deref());
        if name.is_none() {
            add_required(&mut errors, "name");
        }

        match name {
            Some(name) if errors.is_empty() => Ok(Department {
                id: self.id.map(DepartmentId::new),
                name,
            }),
            _ => Err(validation_errors_to_error(errors)),
        }
    }
}
