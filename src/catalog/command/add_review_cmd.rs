use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddReviewCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddReviewCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddReviewCommandRequest {
    pub product_id: String,
    pub review: String,
}

impl AddReviewCommandRequest {
    pub fn new(product_id: &str, review: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            review: review.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddReviewCommandResponse {
    pub message: String,
}

impl AddReviewCommandResponse {
    pub fn new() -> Self {
        Self {
            message: "Comment added successfully".to_string(),
        }
    }
}

#[async_trait]
impl Command<AddReviewCommandRequest, AddReviewCommandResponse> for AddReviewCommand {
    async fn execute(&self, req: AddReviewCommandRequest) -> Result<AddReviewCommandResponse, CommandError> {
        self.catalog_service.add_review(req.product_id.as_str(), req.review.as_str()).await
            .map_err(CommandError::from).map(|_| AddReviewCommandResponse::new())
    }
}
