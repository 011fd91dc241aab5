//! Seller entity.

use crate::{Department, SellerId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seller belonging to exactly one department.
///
/// The owning [`Department`] travels with the seller as a value, the
/// way list views present it, rather than as a bare foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Store-assigned identifier, `None` until first insert.
    pub id: Option<SellerId>,

    /// Display name.
    pub name: String,

    /// Contact email, kept exactly as entered on the form.
    pub email: String,

    /// Date of birth.
    pub birth_date: NaiveDate,

    /// Base salary in currency units.
    pub base_salary: f64,

    /// Owning department.
    pub department: Department,
}

impl Seller {
    /// Creates a transient seller.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: f64,
        department: Department,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// Creates a seller already persisted under `id`.
    #[must_use]
    pub fn with_id(
        id: SellerId,
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: f64,
        department: Department,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// True once the store has assigned an identifier.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
