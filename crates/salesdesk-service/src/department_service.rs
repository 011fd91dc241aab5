//! Department service implementation.

use async_trait::async_trait;
use salesdesk_core::{Department, DepartmentId, SalesDeskError, SalesDeskResult};
use salesdesk_repository::DepartmentRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Department service trait.
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Inserts the department when it is transient, updates it otherwise.
    async fn save_or_update(&self, department: Department) -> SalesDeskResult<Department>;

    /// Returns all departments.
    async fn find_all(&self) -> SalesDeskResult<Vec<Department>>;

    /// Finds a department by id.
    async fn find_by_id(&self, id: DepartmentId) -> SalesDeskResult<Department>;

    /// Removes a persisted department.
    async fn remove(&self, department: &Department) -> SalesDeskResult<()>;
}

/// Department service implementation.
pub struct DepartmentServiceImpl<R: DepartmentRepository> {
    repository: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentServiceImpl<R> {
    /// Creates a new department service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DepartmentRepository + 'static> DepartmentService for DepartmentServiceImpl<R> {
    async fn save_or_update(&self, department: Department) -> SalesDeskResult<Department> {
        if let Some(id) = department.id {
            debug!("Updating department: {}", id);
            self.repository.update(&department).await?;
            info!("Department updated: {}", department.name);
            Ok(department)
        } else {
            debug!("Inserting new department: {}", department.name);
            let saved = self.repository.insert(&department).await?;
            info!("Department created: {}", saved.name);
            Ok(saved)
        }
    }

    async fn find_all(&self) -> SalesDeskResult<Vec<Department>> {
        debug!("Listing departments");
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: DepartmentId) -> SalesDeskResult<Department> {
        debug!("Fetching department: {}", id);
        self.repository.find_by_id(id).await
    }

    async fn remove(&self, department: &Department) -> SalesDeskResult<()> {
        let id = department.id.ok_or_else(|| {
            SalesDeskError::internal("cannot remove a department that was never saved")
        })?;

        debug!("Removing department: {}", id);
        self.repository.delete_by_id(id).await?;
        info!("Department removed: {}", department.name);
        Ok(())
    }
}
