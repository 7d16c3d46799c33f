pub mod ddb_list_repository;
pub mod memory_list_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::lists::domain::model::ListEntryEntity;

// ListRepository stores the entries of one list. `create` is an atomic insert-if-absent
// on the entry key and fails with DuplicateKey when the product is already listed.
#[async_trait]
pub trait ListRepository: Repository<ListEntryEntity> {
    // None matches entries stored without an email
    async fn find_by_email(&self, email: Option<&str>) -> LibraryResult<Vec<ListEntryEntity>>;

    // sets the status flag and returns the updated entry, NotFound if absent
    async fn update_status(&self, id: &str, status: bool) -> LibraryResult<ListEntryEntity>;
}
