use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::products::dto::ProductDto;

pub(crate) struct AddProductCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddProductCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the identifier is always assigned here, any `_id` sent by the caller is ignored
#[derive(Debug, Deserialize)]
pub(crate) struct AddProductCommandRequest {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "PublicationDate", default)]
    pub publication_date: String,
    #[serde(rename = "Reviews", default)]
    pub reviews: Vec<String>,
}

impl AddProductCommandRequest {
    pub fn new(title: &str, author: &str, genre: &str, publication_date: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date: publication_date.to_string(),
            reviews: vec![],
        }
    }

    pub fn build_product(&self) -> ProductDto {
        let mut product = ProductDto::new(self.title.as_str(), self.author.as_str(),
                                          self.genre.as_str(), self.publication_date.as_str());
        product.reviews = self.reviews.clone();
        product
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddProductCommandResponse {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

impl AddProductCommandResponse {
    pub fn new(product: ProductDto) -> Self {
        Self {
            acknowledged: true,
            inserted_id: product.product_id,
        }
    }
}

#[async_trait]
impl Command<AddProductCommandRequest, AddProductCommandResponse> for AddProductCommand {
    async fn execute(&self, req: AddProductCommandRequest) -> Result<AddProductCommandResponse, CommandError> {
        let product = req.build_product();
        self.catalog_service.add_product(&product).await.map_err(CommandError::from).map(AddProductCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::json;
    use crate::catalog::command::add_product_cmd::{AddProductCommand, AddProductCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddProductCommand> = AsyncOnce::new(async {
                AddProductCommand::new(factory::create_memory_catalog_service().await)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_product() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddProductCommandRequest::new("Dune", "Frank Herbert", "Science Fiction", "1965"))
            .await.expect("should add product");
        assert!(res.acknowledged);
        assert!(!res.inserted_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_ignore_caller_id() {
        let req: AddProductCommandRequest = serde_json::from_value(json!({
            "_id": "chosen-by-caller", "Title": "Dune", "Reviews": ["classic"]})).expect("should parse request");
        let product = req.build_product();
        assert_ne!("chosen-by-caller", product.product_id.as_str());
        assert_eq!(vec!["classic".to_string()], product.reviews);
    }
}
