use async_trait::async_trait;
use tracing::{debug, info};
use crate::catalog::domain::CatalogService;
use crate::catalog::query::CatalogQuery;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::products::domain::model::ProductEntity;
use crate::products::dto::{ProductDto, ProductEdit};
use crate::products::repository::ProductRepository;

pub(crate) struct CatalogServiceImpl {
    product_repository: Box<dyn ProductRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, product_repository: Box<dyn ProductRepository>) -> Self {
        Self {
            product_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_product(&self, product: &ProductDto) -> LibraryResult<ProductDto> {
        let _ = self.product_repository.create(&ProductEntity::from(product)).await?;
        info!(product_id = product.product_id.as_str(), "product added");
        Ok(product.clone())
    }

    async fn remove_product(&self, id: &str) -> LibraryResult<usize> {
        let deleted = self.product_repository.delete(id).await?;
        info!(product_id = id, deleted, "product removed");
        Ok(deleted)
    }

    async fn edit_product(&self, id: &str, edit: &ProductEdit) -> LibraryResult<()> {
        self.product_repository.edit(id, edit).await.map(|_| ())
    }

    async fn add_review(&self, id: &str, review: &str) -> LibraryResult<()> {
        self.product_repository.push_review(id, review).await.map(|_| ())
    }

    async fn find_product_by_id(&self, id: &str) -> LibraryResult<ProductDto> {
        self.product_repository.get(id).await.map(|p| ProductDto::from(&p))
    }

    async fn search_products(&self, query: &CatalogQuery) -> LibraryResult<Vec<ProductDto>> {
        let filter = query.to_filter()?;
        debug!(filter = %filter.describe(), "searching products");
        let res = self.product_repository.find(&filter).await?;
        Ok(res.iter().map(ProductDto::from).collect())
    }
}

impl From<&ProductEntity> for ProductDto {
    fn from(other: &ProductEntity) -> Self {
        Self {
            product_id: other.product_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_date: other.publication_date.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}

impl From<&ProductDto> for ProductEntity {
    fn from(other: &ProductDto) -> Self {
        Self {
            product_id: other.product_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_date: other.publication_date.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}
