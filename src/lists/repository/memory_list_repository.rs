use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::{LibraryError, LibraryResult, ListKind};
use crate::core::repository::Repository;
use crate::lists::domain::model::ListEntryEntity;
use crate::lists::repository::ListRepository;

#[derive(Debug)]
pub struct MemoryListRepository {
    kind: ListKind,
    entries: RwLock<Vec<ListEntryEntity>>,
}

impl MemoryListRepository {
    pub(crate) fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<ListEntryEntity> for MemoryListRepository {
    // check and insert happen under one write lock
    async fn create(&self, entity: &ListEntryEntity) -> LibraryResult<usize> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.entry_id == entity.entry_id) {
            return Err(LibraryError::duplicate_key(
                format!("{} already has {}", self.kind, entity.id).as_str()));
        }
        entries.push(entity.clone());
        Ok(1)
    }
}

#[async_trait]
impl ListRepository for MemoryListRepository {
    async fn find_by_email(&self, email: Option<&str>) -> LibraryResult<Vec<ListEntryEntity>> {
        Ok(self.entries.read().await.iter()
            .filter(|e| e.owned_by(email))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: bool) -> LibraryResult<ListEntryEntity> {
        let mut entries = self.entries.write().await;
        let entry = entries.iter_mut()
            .find(|e| e.entry_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("{} entry not found for {}", self.kind, id).as_str()))?;
        entry.status = status;
        Ok(entry.clone())
    }
}
