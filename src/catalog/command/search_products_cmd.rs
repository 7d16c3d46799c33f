use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::query::CatalogQuery;
use crate::core::command::{Command, CommandError};
use crate::products::dto::ProductDto;

pub(crate) struct SearchProductsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchProductsCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchProductsCommandRequest {
    pub query: CatalogQuery,
}

impl SearchProductsCommandRequest {
    pub fn new(query: CatalogQuery) -> Self {
        Self {
            query,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchProductsCommandResponse {
    pub status: bool,
    pub data: Vec<ProductDto>,
}

impl SearchProductsCommandResponse {
    pub fn new(data: Vec<ProductDto>) -> Self {
        Self {
            status: true,
            data,
        }
    }
}

#[async_trait]
impl Command<SearchProductsCommandRequest, SearchProductsCommandResponse> for SearchProductsCommand {
    async fn execute(&self, req: SearchProductsCommandRequest) -> Result<SearchProductsCommandResponse, CommandError> {
        self.catalog_service.search_products(&req.query).await
            .map_err(CommandError::from).map(SearchProductsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_product_cmd::{AddProductCommand, AddProductCommandRequest};
    use crate::catalog::command::search_products_cmd::{SearchProductsCommand, SearchProductsCommandRequest};
    use crate::catalog::factory;
    use crate::catalog::query::CatalogQuery;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_search_products() {
        let svc = factory::create_memory_catalog_service().await;
        let add_cmd = AddProductCommand::new(svc.clone());
        let search_cmd = SearchProductsCommand::new(svc);

        for (title, author, genre, date) in [
            ("Project Hail Mary", "Andy Weir", "Science Fiction", "May 2021"),
            ("The Martian", "Andy Weir", "Science Fiction", "March 2020"),
            ("The Vanishing Half", "Brit Bennett", "Fiction", "2020"),
        ] {
            let _ = add_cmd.execute(AddProductCommandRequest::new(title, author, genre, date))
                .await.expect("should add product");
        }

        let res = search_cmd.execute(SearchProductsCommandRequest::new(CatalogQuery::default()))
            .await.expect("should search products");
        assert!(res.status);
        assert_eq!(3, res.data.len());

        let res = search_cmd.execute(SearchProductsCommandRequest::new(
            CatalogQuery::new(Some("2020"), None, Some("weir")))).await.expect("should search products");
        assert_eq!(1, res.data.len());
        assert_eq!("The Martian", res.data[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_search_term() {
        let search_cmd = SearchProductsCommand::new(factory::create_memory_catalog_service().await);
        let res = search_cmd.execute(SearchProductsCommandRequest::new(
            CatalogQuery::new(None, None, Some("*")))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
