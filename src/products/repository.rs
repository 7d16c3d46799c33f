pub mod ddb_product_repository;
pub mod memory_product_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::products::domain::model::ProductEntity;
use crate::products::dto::ProductEdit;
use crate::products::filter::ProductFilter;

#[async_trait]
pub trait ProductRepository: Repository<ProductEntity> {
    // loads one product, NotFound if it doesn't exist
    async fn get(&self, id: &str) -> LibraryResult<ProductEntity>;

    // deletes a product, returns number of deleted records (0 when it didn't exist)
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // finds every product matching the filter in store order
    async fn find(&self, filter: &ProductFilter) -> LibraryResult<Vec<ProductEntity>>;

    // overwrites descriptive fields, NotFound if the product doesn't exist
    async fn edit(&self, id: &str, edit: &ProductEdit) -> LibraryResult<usize>;

    // appends one review, NotFound if the product doesn't exist
    async fn push_review(&self, id: &str, review: &str) -> LibraryResult<usize>;
}
