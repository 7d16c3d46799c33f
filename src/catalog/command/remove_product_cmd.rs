use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveProductCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveProductCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveProductCommandRequest {
    pub(crate) product_id: String,
}

impl RemoveProductCommandRequest {
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveProductCommandResponse {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: usize,
}

impl RemoveProductCommandResponse {
    pub fn new(deleted_count: usize) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[async_trait]
impl Command<RemoveProductCommandRequest, RemoveProductCommandResponse> for RemoveProductCommand {
    async fn execute(&self, req: RemoveProductCommandRequest) -> Result<RemoveProductCommandResponse, CommandError> {
        self.catalog_service.remove_product(req.product_id.as_str()).await
            .map_err(CommandError::from).map(RemoveProductCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_product_cmd::{AddProductCommand, AddProductCommandRequest};
    use crate::catalog::command::remove_product_cmd::{RemoveProductCommand, RemoveProductCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_remove_product() {
        let svc = factory::create_memory_catalog_service().await;
        let add_cmd = AddProductCommand::new(svc.clone());
        let remove_cmd = RemoveProductCommand::new(svc);

        let res = add_cmd.execute(AddProductCommandRequest::new("Dune", "Frank Herbert", "Science Fiction", "1965"))
            .await.expect("should add product");
        let removed = remove_cmd.execute(RemoveProductCommandRequest::new(res.inserted_id.to_string()))
            .await.expect("should remove product");
        assert_eq!(1, removed.deleted_count);
        let removed = remove_cmd.execute(RemoveProductCommandRequest::new(res.inserted_id.to_string()))
            .await.expect("should remove product");
        assert_eq!(0, removed.deleted_count);
    }
}
