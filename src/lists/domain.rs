use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::core::library::{LibraryResult, ListKind};
use crate::lists::dto::ListEntryDto;

pub mod model;
pub mod service;

#[async_trait]
pub trait ListService: Sync + Send {
    fn kind(&self) -> ListKind;
    // inserts unless the product is already on the list, DuplicateKey otherwise
    async fn add_entry(&self, payload: Map<String, Value>) -> LibraryResult<ListEntryDto>;
    async fn find_by_email(&self, email: Option<&str>) -> LibraryResult<Vec<ListEntryDto>>;
    // sets the read flag, NotFound if there's no such entry. Only the reading list tracks it,
    // other lists fail with Validation.
    async fn mark_read(&self, id: &str) -> LibraryResult<ListEntryDto>;
}
