//! SQLite seller repository implementation.

use crate::pool::DatabasePool;
use crate::sqlite::NO_ROWS_AFFECTED;
use crate::traits::SellerRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use salesdesk_core::{Department, DepartmentId, SalesDeskError, SalesDeskResult, Seller, SellerId};
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// SQLite seller repository implementation.
#[derive(Clone)]
pub struct SqliteSellerRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteSellerRepository {
    /// Creates a new SQLite seller repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a seller joined with its department.
#[derive(Debug, FromRow)]
struct SellerRow {
    id: i64,
    name: String,
    email: String,
    birth_date: NaiveDate,
    base_salary: f64,
    department_id: i64,
    department_name: String,
}

impl From<SellerRow> for Seller {
    fn from(row: SellerRow) -> Self {
        let department =
            Department::with_id(DepartmentId::new(row.department_id), row.department_name);
        Seller::with_id(
            SellerId::new(row.id),
            row.name,
            row.email,
            row.birth_date,
            row.base_salary,
            department,
        )
    }
}

/// Converts joined rows, building each department value once per
/// distinct id within this call.
fn rows_to_sellers(rows: Vec<SellerRow>) -> Vec<Seller> {
    let mut departments: HashMap<i64, Department> = HashMap::new();

    rows.into_iter()
        .map(|row| {
            let department = departments
                .entry(row.department_id)
                .or_insert_with(|| {
                    Department::with_id(
                        DepartmentId::new(row.department_id),
                        row.department_name.clone(),
                    )
                })
                .clone();

            Seller::with_id(
                SellerId::new(row.id),
                row.name,
                row.email,
                row.birth_date,
                row.base_salary,
                department,
            )
        })
        .collect()
}

#[async_trait]
impl SellerRepository for SqliteSellerRepository {
    async fn insert(&self, seller: &Seller) -> SalesDeskResult<Seller> {
        let department_id = seller.department.id.ok_or_else(|| {
            SalesDeskError::internal("cannot insert a seller without a persisted department")
        })?;

        debug!("Inserting seller: {}", seller.name);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO seller (Name, Email, BirthDate, BaseSalary, DepartmentId)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id.into_inner())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(SalesDeskError::database(NO_ROWS_AFFECTED));
        }

        let id = SellerId::new(result.last_insert_rowid());
        tx.commit().await?;

        let mut inserted = seller.clone();
        inserted.id = Some(id);
        Ok(inserted)
    }

    async fn update(&self, seller: &Seller) -> SalesDeskResult<()> {
        let id = seller
            .id
            .ok_or_else(|| SalesDeskError::internal("cannot update a seller without an id"))?;
        let department_id = seller.department.id.ok_or_else(|| {
            SalesDeskError::internal("cannot update a seller without a persisted department")
        })?;

        debug!("Updating seller: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE seller
            SET Name = ?, Email = ?, BirthDate = ?, BaseSalary = ?, DepartmentId = ?
            WHERE Id = ?
            "#,
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id.into_inner())
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(SalesDeskError::database(NO_ROWS_AFFECTED));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: SellerId) -> SalesDeskResult<()> {
        debug!("Deleting seller: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query("DELETE FROM seller WHERE Id = ?")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(SalesDeskError::database(NO_ROWS_AFFECTED));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: SellerId) -> SalesDeskResult<Seller> {
        debug!("Finding seller by id: {}", id);

        let row = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.Id AS id, seller.Name AS name, seller.Email AS email,
                   seller.BirthDate AS birth_date, seller.BaseSalary AS base_salary,
                   seller.DepartmentId AS department_id, department.Name AS department_name
            FROM seller
            INNER JOIN department ON seller.DepartmentId = department.Id
            WHERE seller.Id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Seller::from)
            .ok_or_else(|| SalesDeskError::not_found("Seller", id))
    }

    async fn find_all(&self) -> SalesDeskResult<Vec<Seller>> {
        debug!("Finding all sellers");

        let rows = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.Id AS id, seller.Name AS name, seller.Email AS email,
                   seller.BirthDate AS birth_date, seller.BaseSalary AS base_salary,
                   seller.DepartmentId AS department_id, department.Name AS department_name
            FROM seller
            INNER JOIN department ON seller.DepartmentId = department.Id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows_to_sellers(rows))
    }

    async fn find_by_department(&self, department: &Department) -> SalesDeskResult<Vec<Seller>> {
        let department_id = department.id.ok_or_else(|| {
            SalesDeskError::internal("cannot list sellers of a department without an id")
        })?;

        debug!("Finding sellers by department: {}", department_id);

        let rows = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.Id AS id, seller.Name AS name, seller.Email AS email,
                   seller.BirthDate AS birth_date, seller.BaseSalary AS base_salary,
                   seller.DepartmentId AS department_id, department.Name AS department_name
            FROM seller
            INNER JOIN department ON seller.DepartmentId = department.Id
            WHERE seller.DepartmentId = ?
            ORDER BY seller.Name
            "#,
        )
        .bind(department_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows_to_sellers(rows))
    }
}
