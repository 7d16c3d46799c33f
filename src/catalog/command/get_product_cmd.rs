use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::products::dto::ProductDto;

pub(crate) struct GetProductCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetProductCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetProductCommandRequest {
    pub(crate) product_id: String,
}

impl GetProductCommandRequest {
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
        }
    }
}

// serialized as the bare product, or null when it doesn't exist
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetProductCommandResponse {
    pub product: Option<ProductDto>,
}

impl GetProductCommandResponse {
    pub fn new(product: Option<ProductDto>) -> Self {
        Self {
            product,
        }
    }
}

#[async_trait]
impl Command<GetProductCommandRequest, GetProductCommandResponse> for GetProductCommand {
    async fn execute(&self, req: GetProductCommandRequest) -> Result<GetProductCommandResponse, CommandError> {
        match self.catalog_service.find_product_by_id(req.product_id.as_str()).await {
            Ok(product) => Ok(GetProductCommandResponse::new(Some(product))),
            Err(LibraryError::NotFound { .. }) => Ok(GetProductCommandResponse::new(None)),
            Err(err) => Err(CommandError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_product_cmd::{AddProductCommand, AddProductCommandRequest};
    use crate::catalog::command::get_product_cmd::{GetProductCommand, GetProductCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_get_product() {
        let svc = factory::create_memory_catalog_service().await;
        let add_cmd = AddProductCommand::new(svc.clone());
        let get_cmd = GetProductCommand::new(svc);

        let req = AddProductCommandRequest::new("Dune", "Frank Herbert", "Science Fiction", "1965");
        let expected = req.build_product();
        let res = add_cmd.execute(req).await.expect("should add product");
        let loaded = get_cmd.execute(GetProductCommandRequest::new(res.inserted_id.to_string()))
            .await.expect("should get product").product.expect("should find product");
        assert_eq!(res.inserted_id, loaded.product_id);
        assert_eq!(expected.title, loaded.title);
        assert_eq!(expected.author, loaded.author);
        assert_eq!(expected.genre, loaded.genre);
        assert_eq!(expected.publication_date, loaded.publication_date);
        assert_eq!(expected.reviews, loaded.reviews);
    }

    #[tokio::test]
    async fn test_should_return_null_for_missing_product() {
        let get_cmd = GetProductCommand::new(factory::create_memory_catalog_service().await);
        let res = get_cmd.execute(GetProductCommandRequest::new("missing".to_string()))
            .await.expect("should not fail");
        assert!(res.product.is_none());
        assert_eq!("null", serde_json::to_string(&res).expect("should serialize"));
    }
}
