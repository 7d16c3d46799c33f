use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::products::dto::ProductEdit;

pub(crate) struct EditProductCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl EditProductCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct EditProductCommandRequest {
    pub product_id: String,
    pub edit: ProductEdit,
}

impl EditProductCommandRequest {
    pub fn new(product_id: &str, edit: ProductEdit) -> Self {
        Self {
            product_id: product_id.to_string(),
            edit,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EditProductCommandResponse {
    pub message: String,
}

impl EditProductCommandResponse {
    pub fn new() -> Self {
        Self {
            message: "Product updated successfully".to_string(),
        }
    }
}

#[async_trait]
impl Command<EditProductCommandRequest, EditProductCommandResponse> for EditProductCommand {
    async fn execute(&self, req: EditProductCommandRequest) -> Result<EditProductCommandResponse, CommandError> {
        self.catalog_service.edit_product(req.product_id.as_str(), &req.edit).await
            .map_err(CommandError::from).map(|_| EditProductCommandResponse::new())
    }
}
