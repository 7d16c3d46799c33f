use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::products::domain::model::ProductEntity;
use crate::products::dto::ProductEdit;
use crate::products::filter::ProductFilter;
use crate::products::repository::ProductRepository;

// MemoryProductRepository keeps products in insertion order, which is the order
// searches return them in.
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    products: RwLock<Vec<ProductEntity>>,
}

impl MemoryProductRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<ProductEntity> for MemoryProductRepository {
    async fn create(&self, entity: &ProductEntity) -> LibraryResult<usize> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.product_id == entity.product_id) {
            return Err(LibraryError::duplicate_key(
                format!("product {} already exists", entity.product_id).as_str()));
        }
        products.push(entity.clone());
        Ok(1)
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get(&self, id: &str) -> LibraryResult<ProductEntity> {
        self.products.read().await.iter()
            .find(|p| p.product_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("product not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.product_id != id);
        Ok(before - products.len())
    }

    async fn find(&self, filter: &ProductFilter) -> LibraryResult<Vec<ProductEntity>> {
        Ok(self.products.read().await.iter()
            .filter(|product| filter.matches(*product))
            .cloned()
            .collect())
    }

    async fn edit(&self, id: &str, edit: &ProductEdit) -> LibraryResult<usize> {
        let mut products = self.products.write().await;
        let product = products.iter_mut()
            .find(|p| p.product_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("product not found for {}", id).as_str()))?;
        product.title = edit.title.to_string();
        product.author = edit.author.to_string();
        product.genre = edit.genre.to_string();
        product.publication_date = edit.publication_date.to_string();
        Ok(1)
    }

    async fn push_review(&self, id: &str, review: &str) -> LibraryResult<usize> {
        let mut products = self.products.write().await;
        let product = products.iter_mut()
            .find(|p| p.product_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("product not found for {}", id).as_str()))?;
        product.reviews.push(review.to_string());
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::products::domain::model::ProductEntity;
    use crate::products::domain::ProductField;
    use crate::products::dto::ProductEdit;
    use crate::products::filter::ProductFilter;
    use crate::products::repository::memory_product_repository::MemoryProductRepository;
    use crate::products::repository::ProductRepository;

    #[tokio::test]
    async fn test_should_create_get_products() {
        let products_repo = MemoryProductRepository::new();
        let product = ProductEntity::new("Dune", "Frank Herbert", "Science Fiction", "1965");
        let size = products_repo.create(&product).await.expect("should create product");
        assert_eq!(1, size);
        let loaded = products_repo.get(product.product_id.as_str()).await.expect("should return product");
        assert_eq!(product, loaded);
        assert!(matches!(products_repo.create(&product).await, Err(LibraryError::DuplicateKey { .. })));
        assert!(matches!(products_repo.get("missing").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_edit_products_keeping_reviews() {
        let products_repo = MemoryProductRepository::new();
        let product = ProductEntity::new("Dune", "Frank Herbert", "Science Fiction", "1965");
        let _ = products_repo.create(&product).await.expect("should create product");
        let _ = products_repo.push_review(product.product_id.as_str(), "classic").await.expect("should add review");

        let edit = ProductEdit::new("Dune Messiah", "Frank Herbert", "Science Fiction", "1969");
        let _ = products_repo.edit(product.product_id.as_str(), &edit).await.expect("should edit product");
        let loaded = products_repo.get(product.product_id.as_str()).await.expect("should return product");
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!("1969", loaded.publication_date.as_str());
        assert_eq!(vec!["classic".to_string()], loaded.reviews);
        assert!(matches!(products_repo.edit("missing", &edit).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(products_repo.push_review("missing", "x").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_find_products_in_insertion_order() {
        let products_repo = MemoryProductRepository::new();
        for title in ["Animal Farm", "Burmese Days", "Coming Up for Air"] {
            let _ = products_repo.create(&ProductEntity::new(title, "George Orwell", "Novel", "1930s"))
                .await.expect("should create product");
        }
        let res = products_repo.find(&ProductFilter::Any).await.expect("should find products");
        let titles: Vec<&str> = res.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(vec!["Animal Farm", "Burmese Days", "Coming Up for Air"], titles);

        let filter = ProductFilter::matching(ProductField::Title, "days").expect("should build filter");
        assert_eq!(1, products_repo.find(&filter).await.expect("should find products").len());
    }

    #[tokio::test]
    async fn test_should_delete_products() {
        let products_repo = MemoryProductRepository::new();
        let product = ProductEntity::new("Dune", "Frank Herbert", "Science Fiction", "1965");
        let _ = products_repo.create(&product).await.expect("should create product");
        assert_eq!(1, products_repo.delete(product.product_id.as_str()).await.expect("should delete product"));
        assert_eq!(0, products_repo.delete(product.product_id.as_str()).await.expect("should delete product"));
        assert!(products_repo.get(product.product_id.as_str()).await.is_err());
    }
}
