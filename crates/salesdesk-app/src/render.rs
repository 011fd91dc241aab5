//! Plain text and JSON rendering of query results.

use salesdesk_core::{Department, SalesDeskResult, Seller, DATE_FORMAT};

/// Renders departments as a fixed-width table.
pub fn department_table(departments: &[Department]) -> String {
    let mut lines = vec![format!("{:>4}  {}", "Id", "Name")];

    for department in departments {
        let id = department.id.map(|id| id.to_string()).unwrap_or_default();
        lines.push(format!("{id:>4}  {}", department.name));
    }

    lines.join("\n")
}

/// Renders sellers as a fixed-width table, department name included.
pub fn seller_table(sellers: &[Seller]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:<20}  {:<25}  {:<10}  {:>11}  {}",
        "Id", "Name", "Email", "Birth date", "Base salary", "Department"
    )];

    for seller in sellers {
        let id = seller.id.map(|id| id.to_string()).unwrap_or_default();
        lines.push(format!(
            "{id:>4}  {:<20}  {:<25}  {:<10}  {:>11.2}  {}",
            seller.name,
            seller.email,
            seller.birth_date.format(DATE_FORMAT),
            seller.base_salary,
            seller.department
        ));
    }

    lines.join("\n")
}

/// Renders any serializable value as pretty printed JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> SalesDeskResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
