//! Repository traits for domain entities.

use async_trait::async_trait;
use salesdesk_core::{Department, DepartmentId, SalesDeskResult, Seller, SellerId};

/// Repository interface for departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Inserts a transient department and returns it carrying the
    /// store-assigned id.
    async fn insert(&self, department: &Department) -> SalesDeskResult<Department>;

    /// Replaces every column of the row matching the department's id.
    async fn update(&self, department: &Department) -> SalesDeskResult<()>;

    /// Deletes the department with the given id.
    async fn delete_by_id(&self, id: DepartmentId) -> SalesDeskResult<()>;

    /// Finds a department by id.
    async fn find_by_id(&self, id: DepartmentId) -> SalesDeskResult<Department>;

    /// Returns all departments in store order.
    async fn find_all(&self) -> SalesDeskResult<Vec<Department>>;
}

/// Repository interface for sellers.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Inserts a transient seller and returns it carrying the
    /// store-assigned id.
    async fn insert(&self, seller: &Seller) -> SalesDeskResult<Seller>;

    /// Replaces every column of the row matching the seller's id.
    async fn update(&self, seller: &Seller) -> SalesDeskResult<()>;

    /// Deletes the seller with the given id.
    async fn delete_by_id(&self, id: SellerId) -> SalesDeskResult<()>;

    /// Finds a seller by id, department included.
    async fn find_by_id(&self, id: SellerId) -> SalesDeskResult<Seller>;

    /// Returns all sellers in store order, each carrying its department.
    async fn find_all(&self) -> SalesDeskResult<Vec<Seller>>;

    /// Returns the sellers of one department ordered by name.
    async fn find_by_department(&self, department: &Department) -> SalesDeskResult<Vec<Seller>>;
}
