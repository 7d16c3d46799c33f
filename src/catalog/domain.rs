pub mod service;

use async_trait::async_trait;
use crate::catalog::query::CatalogQuery;
use crate::core::library::LibraryResult;
use crate::products::dto::{ProductDto, ProductEdit};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_product(&self, product: &ProductDto) -> LibraryResult<ProductDto>;
    async fn remove_product(&self, id: &str) -> LibraryResult<usize>;
    async fn edit_product(&self, id: &str, edit: &ProductEdit) -> LibraryResult<()>;
    async fn add_review(&self, id: &str, review: &str) -> LibraryResult<()>;
    async fn find_product_by_id(&self, id: &str) -> LibraryResult<ProductDto>;
    async fn search_products(&self, query: &CatalogQuery) -> LibraryResult<Vec<ProductDto>>;
}
