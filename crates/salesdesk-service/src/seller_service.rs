//! Seller service implementation.

use async_trait::async_trait;
use salesdesk_core::{Department, SalesDeskError, SalesDeskResult, Seller, SellerId};
use salesdesk_repository::SellerRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Seller service trait.
#[async_trait]
pub trait SellerService: Send + Sync {
    /// Inserts the seller when it is transient, updates it otherwise.
    async fn save_or_update(&self, seller: Seller) -> SalesDeskResult<Seller>;

    /// Returns all sellers, each carrying its department.
    async fn find_all(&self) -> SalesDeskResult<Vec<Seller>>;

    /// Finds a seller by id.
    async fn find_by_id(&self, id: SellerId) -> SalesDeskResult<Seller>;

    /// Returns the sellers of one department ordered by name.
    async fn find_by_department(&self, department: &Department) -> SalesDeskResult<Vec<Seller>>;

    /// Removes a persisted seller.
    async fn remove(&self, seller: &Seller) -> SalesDeskResult<()>;
}

/// Seller service implementation.
pub struct SellerServiceImpl<R: SellerRepository> {
    repository: Arc<R>,
}

impl<R: SellerRepository> SellerServiceImpl<R> {
    /// Creates a new seller service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SellerRepository + 'static> SellerService for SellerServiceImpl<R> {
    async fn save_or_update(&self, seller: Seller) -> SalesDeskResult<Seller> {
        if let Some(id) = seller.id {
            debug!("Updating seller: {}", id);
            self.repository.update(&seller).await?;
            info!("Seller updated: {}", seller.name);
            Ok(seller)
        } else {
            debug!("Inserting new seller: {}", seller.name);
            let saved = self.repository.insert(&seller).await?;
            info!("Seller created: {}", saved.name);
            Ok(saved)
        }
    }

    async fn find_all(&self) -> SalesDeskResult<Vec<Seller>> {
        debug!("Listing sellers");
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: SellerId) -> SalesDeskResult<Seller> {
        debug!("Fetching seller: {}", id);
        self.repository.find_by_id(id).await
    }

    async fn find_by_department(&self, department: &Department) -> SalesDeskResult<Vec<Seller>> {
        debug!("Listing sellers of department: {}", department.name);
        self.repository.find_by_department(department).await
    }

    async fn remove(&self, seller: &Seller) -> SalesDeskResult<()> {
        let id = seller
            .id
            .ok_or_else(|| SalesDeskError::internal("cannot remove a seller that was never saved"))?;

        debug!("Removing seller: {}", id);
        self.repository.delete_by_id(id).await?;
        info!("Seller removed: {}", seller.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use salesdesk_core::DepartmentId;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    /// Mock seller repository for testing.
    struct MockSellerRepository {
        sellers: Mutex<HashMap<SellerId, Seller>>,
        next_id: AtomicI64,
    }

    impl MockSellerRepository {
        fn new() -> Self {
            Self {
                sellers: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl SellerRepository for MockSellerRepository {
        async fn insert(&self, seller: &Seller) -> SalesDeskResult<Seller> {
            let id = SellerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let mut saved = seller.clone();
            saved.id = Some(id);
            self.sellers.lock().unwrap().insert(id, saved.clone());
            Ok(saved)
        }

        async fn update(&self, seller: &Seller) -> SalesDeskResult<()> {
            let id = seller.id.expect("update requires an id");
            let mut sellers = self.sellers.lock().unwrap();
            if !sellers.contains_key(&id) {
                return Err(SalesDeskError::database("Unexpected error: no rows affected"));
            }
            sellers.insert(id, seller.clone());
            Ok(())
        }

        async fn delete_by_id(&self, id: SellerId) -> SalesDeskResult<()> {
            if self.sellers.lock().unwrap().remove(&id).is_none() {
                return Err(SalesDeskError::database("Unexpected error: no rows affected"));
            }
            Ok(())
        }

        async fn find_by_id(&self, id: SellerId) -> SalesDeskResult<Seller> {
            self.sellers
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| SalesDeskError::not_found("Seller", id))
        }

        async fn find_all(&self) -> SalesDeskResult<Vec<Seller>> {
            Ok(self.sellers.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_department(
            &self,
            department: &Department,
        ) -> SalesDeskResult<Vec<Seller>> {
            let mut matching: Vec<Seller> = self
                .sellers
                .lock()
                .unwrap()
                .values()
                .filter(|s| s.department.id == department.id)
                .cloned()
                .collect();
            matching.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(matching)
        }
    }

    fn sales() -> Department {
        Department::with_id(DepartmentId::new(1), "Sales")
    }

    fn books() -> Department {
        Department::with_id(DepartmentId::new(2), "Books")
    }

    fn seller(name: &str, department: Department) -> Seller {
        Seller::new(
            name,
            format!("{}@example.com", name.to_lowercase()),
            NaiveDate::from_ymd_opt(1990, 4, 21).unwrap(),
            2500.0,
            department,
        )
    }

    #[tokio::test]
    async fn test_save_or_update_inserts_transient_seller() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        let saved = service
            .save_or_update(seller("Alice", sales()))
            .await
            .unwrap();

        assert!(saved.is_persisted());
        assert_eq!(saved.name, "Alice");
    }

    #[tokio::test]
    async fn test_save_or_update_keeps_id_on_update() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        let saved = service
            .save_or_update(seller("Alice", sales()))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let mut moved = saved;
        moved.department = books();
        let updated = service.save_or_update(moved).await.unwrap();

        assert_eq!(updated.id, Some(id));
        let found = service.find_by_id(id).await.unwrap();
        assert_eq!(found.department, books());
    }

    #[tokio::test]
    async fn test_save_or_update_missing_row_surfaces_error() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        let mut ghost = seller("Ghost", sales());
        ghost.id = Some(SellerId::new(404));
        let err = service.save_or_update(ghost).await.unwrap_err();

        assert!(matches!(err, SalesDeskError::Database(_)));
    }

    #[tokio::test]
    async fn test_find_by_department_filters() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        for (name, department) in [
            ("Carl", sales()),
            ("Alice", books()),
            ("Bob", sales()),
        ] {
            service.save_or_update(seller(name, department)).await.unwrap();
        }

        let in_sales = service.find_by_department(&sales()).await.unwrap();
        let names: Vec<&str> = in_sales.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carl"]);
    }

    #[tokio::test]
    async fn test_remove_requires_persisted_entity() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        let err = service.remove(&seller("Alice", sales())).await.unwrap_err();

        assert!(matches!(err, SalesDeskError::Internal(_)));
    }

    #[tokio::test]
    async fn test_remove_delegates_to_delete() {
        let repo = Arc::new(MockSellerRepository::new());
        let service = SellerServiceImpl::new(repo);

        let saved = service
            .save_or_update(seller("Alice", sales()))
            .await
            .unwrap();
        service.remove(&saved).await.unwrap();

        let err = service.find_by_id(saved.id.unwrap()).await.unwrap_err();
        assert!(matches!(err, SalesDeskError::NotFound { .. }));
    }
}
