use std::sync::Arc;

use crate::data::category_repository::CategoryRepository;
use crate::domain::{category::Category, error::DomainError};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_category(&self, id: Uuid) -> Result<Category, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, name: String) -> Result<Category, DomainError> {
        let category = Category::new(name)?;
        self.repo.create(category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory::InMemoryCategoryRepository;

    #[tokio::test]
    async fn created_category_can_be_fetched() {
        let service = CategoryService::new(Arc::new(InMemoryCategoryRepository::new()));

        let created = service.create_category("Tech".into()).await.unwrap();
        let fetched = service.get_category(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(service.get_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_not_stored() {
        let service = CategoryService::new(Arc::new(InMemoryCategoryRepository::new()));

        let err = service.create_category(String::new()).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.get_categories().await.unwrap().is_empty());
    }
}
