//! Department entity.

use crate::DepartmentId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Organizational unit that sellers belong to.
///
/// A department starts transient (`id` is `None`) and receives its
/// identifier from the store on first successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned identifier, `None` until first insert.
    pub id: Option<DepartmentId>,

    /// Display name.
    pub name: String,
}

impl Department {
    /// Creates a transient department.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a department already persisted under `id`.
    #[must_use]
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// True once the store has assigned an identifier.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Renders the name, which is how departments appear in pickers and
/// listing columns.
impl Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
