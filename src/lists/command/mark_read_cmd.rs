use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::lists::domain::ListService;
use crate::lists::dto::ListEntryDto;

pub(crate) struct MarkReadCommand {
    list_service: Arc<dyn ListService>,
}

impl MarkReadCommand {
    pub(crate) fn new(list_service: Arc<dyn ListService>) -> Self {
        Self {
            list_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct MarkReadCommandRequest {
    pub entry_id: String,
}

impl MarkReadCommandRequest {
    pub fn new(entry_id: String) -> Self {
        Self {
            entry_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct MarkReadCommandResponse {
    pub entry: ListEntryDto,
}

impl MarkReadCommandResponse {
    pub fn new(entry: ListEntryDto) -> Self {
        Self {
            entry,
        }
    }
}

#[async_trait]
impl Command<MarkReadCommandRequest, MarkReadCommandResponse> for MarkReadCommand {
    async fn execute(&self, req: MarkReadCommandRequest) -> Result<MarkReadCommandResponse, CommandError> {
        self.list_service.mark_read(req.entry_id.as_str()).await.map_err(CommandError::from).map(MarkReadCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::ListKind;
    use crate::lists::command::add_entry_cmd::{AddEntryCommand, AddEntryCommandRequest};
    use crate::lists::command::mark_read_cmd::{MarkReadCommand, MarkReadCommandRequest};
    use crate::lists::factory;

    #[tokio::test]
    async fn test_should_run_mark_read() {
        let svc = factory::create_memory_list_service(ListKind::Reading).await;
        let add_cmd = AddEntryCommand::new(svc.clone());
        let mark_cmd = MarkReadCommand::new(svc);

        let payload = json!({"_id": "p1", "email": "a@b.com"}).as_object().cloned()
            .expect("should be an object");
        let _ = add_cmd.execute(AddEntryCommandRequest::new(payload)).await.expect("should add entry");

        let res = mark_cmd.execute(MarkReadCommandRequest::new("p1".to_string())).await.expect("should mark entry");
        assert_eq!(json!({"_id": "p1", "readingStatus": true, "id": "p1", "data": {"email": "a@b.com"}}),
                   serde_json::to_value(&res).expect("should serialize"));

        let err = mark_cmd.execute(MarkReadCommandRequest::new("missing".to_string())).await;
        assert!(matches!(err, Err(CommandError::NotFound { .. })));
    }
}
