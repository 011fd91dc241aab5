//! SQLite department repository implementation.

use crate::pool::DatabasePool;
use crate::sqlite::NO_ROWS_AFFECTED;
use crate::traits::DepartmentRepository;
use async_trait::async_trait;
use salesdesk_core::{Department, DepartmentId, SalesDeskError, SalesDeskResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite department repository implementation.
#[derive(Clone)]
pub struct SqliteDepartmentRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteDepartmentRepository {
    /// Creates a new SQLite department repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a department.
#[derive(Debug, FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department::with_id(DepartmentId::new(row.id), row.name)
    }
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepository {
    async fn insert(&self, department: &Department) -> SalesDeskResult<Department> {
        debug!("Inserting department: {}", department.name);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query("INSERT INTO department (Name) VALUES (?)")
            .bind(&department.name)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(SalesDeskError::database(NO_ROWS_AFFECTED));
        }

        let id = DepartmentId::new(result.last_insert_rowid());
        tx.commit().await?;

        Ok(Department::with_id(id, department.name.clone()))
    }

    async fn update(&self, department: &Department) -> SalesDeskResult<()> {
        let id = department
            .id
            .ok_or_else(|| SalesDeskError::internal("cannot update a department without an id"))?;

        debug!("Updating department: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query("UPDATE department SET Name = ? WHERE Id = ?")
            .bind(&department.name)
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

    async fn delete_by_id(&self, id: DepartmentId) -> SalesDeskResult<()> {
        debug!("Deleting department: {}", id);

        let mut tx = self.pool.inner().begin().await?;

        // A department still referenced by sellers fails here with a
        // foreign key violation, which maps to IntegrityConstraint.
        let result = sqlx::query("DELETE FROM department WHERE Id = ?")
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

    async fn find_by_id(&self, id: DepartmentId) -> SalesDeskResult<Department> {
        debug!("Finding department by id: {}", id);

        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT Id AS id, Name AS name FROM department WHERE Id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Department::from)
            .ok_or_else(|| SalesDeskError::not_found("Department", id))
    }

    async fn find_all(&self) -> SalesDeskResult<Vec<Department>> {
        debug!("Finding all departments");

        let rows =
            sqlx::query_as::<_, DepartmentRow>("SELECT Id AS id, Name AS name FROM department")
                .fetch_all(self.pool.inner())
                .await?;

        Ok(rows.into_iter().map(Department::from).collect())
    }
}
