use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, ListKind};
use crate::lists::domain::ListService;
use crate::lists::domain::model::ListEntryEntity;
use crate::lists::dto::ListEntryDto;
use crate::lists::repository::ListRepository;

pub(crate) struct ListServiceImpl {
    kind: ListKind,
    list_repository: Box<dyn ListRepository>,
}

impl ListServiceImpl {
    pub(crate) fn new(_config: &Configuration, kind: ListKind, list_repository: Box<dyn ListRepository>) -> Self {
        Self {
            kind,
            list_repository,
        }
    }
}

#[async_trait]
impl ListService for ListServiceImpl {
    fn kind(&self) -> ListKind {
        self.kind
    }

    async fn add_entry(&self, payload: Map<String, Value>) -> LibraryResult<ListEntryDto> {
        let entry = ListEntryEntity::from_payload(self.kind, payload)?;
        match self.list_repository.create(&entry).await {
            Ok(_) => {
                info!(list = %self.kind, product_id = entry.id.as_str(), "entry added");
                Ok(ListEntryDto::from(&entry))
            }
            Err(err @ LibraryError::DuplicateKey { .. }) => {
                warn!(list = %self.kind, product_id = entry.id.as_str(), "entry already listed");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_by_email(&self, email: Option<&str>) -> LibraryResult<Vec<ListEntryDto>> {
        let res = self.list_repository.find_by_email(email).await?;
        Ok(res.iter().map(ListEntryDto::from).collect())
    }

    async fn mark_read(&self, id: &str) -> LibraryResult<ListEntryDto> {
        if self.kind != ListKind::Reading {
            return Err(LibraryError::validation(
                format!("{} entries have no read status", self.kind).as_str(), Some("400".to_string())));
        }
        let entry = self.list_repository.update_status(id, true).await?;
        info!(list = %self.kind, product_id = id, "entry marked read");
        Ok(ListEntryDto::from(&entry))
    }
}

impl From<&ListEntryEntity> for ListEntryDto {
    fn from(other: &ListEntryEntity) -> Self {
        Self {
            entry_id: other.entry_id.to_string(),
            kind: other.kind,
            status: other.status,
            id: other.id.to_string(),
            data: other.data.clone(),
        }
    }
}
