//! Seller form binding.

use salesdesk_core::{
    add_required, non_blank, try_parse_amount, try_parse_date, validation_errors_to_error,
    Department, SalesDeskResult, Seller, SellerId,
};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Raw form input for creating or editing a seller.
///
/// The owning department is chosen outside the form (the caller
/// resolves it to a persisted [`Department`] before conversion), so it
/// is not one of the validated fields here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerForm {
    /// Identifier of the seller being edited, absent on create.
    pub id: Option<i64>,

    /// Name as typed.
    pub name: Option<String>,

    /// Email as typed.
    pub email: Option<String>,

    /// Birth date as typed, expected as `YYYY-MM-DD`.
    pub birth_date: Option<String>,

    /// Base salary as typed.
    pub base_salary: Option<String>,
}

impl SellerForm {
    /// Checks the form and builds the entity it describes.
    ///
    /// A field that is blank or unparseable counts as missing, and
    /// every missing field is reported at once, not just the first.
    pub fn into_seller(self, department: Department) -> SalesDeskResult<Seller> {
        let mut errors = ValidationErrors::new();

        let name = non_blank(self.name.as_deref());
        if name.is_none() {
            add_required(&mut errors, "name");
        }

        let email = non_blank(self.email.as_deref());
        if email.is_none() {
            add_required(&mut errors, "email");
        }

        let birth_date = self.birth_date.as_deref().and_then(try_parse_date);
        if birth_date.is_none() {
            add_required(&mut errors, "birthDate");
        }

        let base_salary = self.base_salary.as_deref().and_then(try_parse_amount);
        if base_salary.is_none() {
            add_required(&mut errors, "baseSalary");
        }

        if let (Some(name), Some(email), Some(birth_date), Some(base_salary)) =
            (name, email, birth_date, base_salary)
        {
            Ok(Seller {
                id: self.id.map(SellerId::new),
                name,
                email,
                birth_date,
                base_salary,
                department,
            })
        } else {
            Err(validation_errors_to_error(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use salesdesk_core::{DepartmentId, REQUIRED_MESSAGE};

    fn sales() -> Department {
        Department::with_id(DepartmentId::new(1), "Sales")
    }

    fn valid_form() -> SellerForm {
        SellerForm {
            id: None,
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            birth_date: Some("1990-04-21".to_string()),
            base_salary: Some("2500.0".to_string()),
        }
    }

    #[test]
    fn test_blank_form_reports_exactly_four_fields() {
        let err = SellerForm::default().into_seller(sales()).unwrap_err();
        let fields = err.field_errors().expect("validation error");

        assert_eq!(fields.len(), 4);

        let names: Vec<&str> = fields.iter().map(|e| e.field.as_str()).collect();
        for expected in ["name", "email", "birthDate", "baseSalary"] {
            assert!(names.contains(&expected), "missing violation for {expected}");
        }
        assert!(fields.iter().all(|e| e.message == REQUIRED_MESSAGE));
    }

    #[test]
    fn test_unparseable_input_counts_as_missing() {
        let form = SellerForm {
            birth_date: Some("21/04/1990".to_string()),
            base_salary: Some("a lot".to_string()),
            ..valid_form()
        };

        let err = form.into_seller(sales()).unwrap_err();
        let fields = err.field_errors().expect("validation error");

        assert_eq!(fields.len(), 2);
        let names: Vec<&str> = fields.iter().map(|e| e.field.as_str()).collect();
        assert!(names.contains(&"birthDate"));
        assert!(names.contains(&"baseSalary"));
        assert!(fields.iter().all(|e| e.message == REQUIRED_MESSAGE));
    }

    #[test]
    fn test_valid_form_builds_transient_seller() {
        let seller = valid_form().into_seller(sales()).unwrap();

        assert!(seller.id.is_none());
        assert_eq!(seller.name, "Alice");
        assert_eq!(seller.email, "alice@example.com");
        assert_eq!(
            seller.birth_date,
            NaiveDate::from_ymd_opt(1990, 4, 21).unwrap()
        );
        assert!((seller.base_salary - 2500.0).abs() < f64::EPSILON);
        assert_eq!(seller.department, sales());
    }

    #[test]
    fn test_form_with_id_keeps_id() {
        let form = SellerForm {
            id: Some(8),
            ..valid_form()
        };

        let seller = form.into_seller(sales()).unwrap();
        assert_eq!(seller.id, Some(SellerId::new(8)));
    }

    #[test]
    fn test_department_absence_is_not_a_form_violation() {
        // Even with no department available the form itself still
        // reports only its own four fields.
        let err = SellerForm::default()
            .into_seller(Department::new("Unsaved"))
            .unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert_eq!(fields.len(), 4);
    }
}
