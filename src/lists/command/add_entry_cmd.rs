use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::core::command::{Command, CommandError};
use crate::lists::domain::ListService;
use crate::lists::dto::ListEntryDto;

pub(crate) struct AddEntryCommand {
    list_service: Arc<dyn ListService>,
}

impl AddEntryCommand {
    pub(crate) fn new(list_service: Arc<dyn ListService>) -> Self {
        Self {
            list_service,
        }
    }
}

// the payload is stored verbatim apart from `_id`, which names the product
#[derive(Debug)]
pub(crate) struct AddEntryCommandRequest {
    pub payload: Map<String, Value>,
}

impl AddEntryCommandRequest {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self {
            payload,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddEntryCommandResponse {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

impl AddEntryCommandResponse {
    pub fn new(entry: ListEntryDto) -> Self {
        Self {
            acknowledged: true,
            inserted_id: entry.entry_id,
        }
    }
}

#[async_trait]
impl Command<AddEntryCommandRequest, AddEntryCommandResponse> for AddEntryCommand {
    async fn execute(&self, req: AddEntryCommandRequest) -> Result<AddEntryCommandResponse, CommandError> {
        self.list_service.add_entry(req.payload).await.map_err(CommandError::from).map(AddEntryCommandResponse::new)
    }
}
