use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lists::domain::ListService;
use crate::lists::dto::ListEntryDto;

pub(crate) struct FindEntriesCommand {
    list_service: Arc<dyn ListService>,
}

impl FindEntriesCommand {
    pub(crate) fn new(list_service: Arc<dyn ListService>) -> Self {
        Self {
            list_service,
        }
    }
}

// an absent email matches entries stored without one
#[derive(Debug, Deserialize)]
pub(crate) struct FindEntriesCommandRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl FindEntriesCommandRequest {
    pub fn new(email: Option<&str>) -> Self {
        Self {
            email: email.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindEntriesCommandResponse {
    pub entries: Vec<ListEntryDto>,
}

impl FindEntriesCommandResponse {
    pub fn new(entries: Vec<ListEntryDto>) -> Self {
        Self {
            entries,
        }
    }
}

#[async_trait]
impl Command<FindEntriesCommandRequest, FindEntriesCommandResponse> for FindEntriesCommand {
    async fn execute(&self, req: FindEntriesCommandRequest) -> Result<FindEntriesCommandResponse, CommandError> {
        self.list_service.find_by_email(req.email.as_deref()).await.map_err(CommandError::from).map(FindEntriesCommandResponse::new)
    }
}
