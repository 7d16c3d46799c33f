use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::StoreClient;
use crate::products::factory;

pub(crate) async fn create_catalog_service(config: &Configuration, client: &StoreClient) -> Box<dyn CatalogService> {
    let product_repo = factory::create_product_repository(config, client).await;
    Box::new(CatalogServiceImpl::new(config, product_repo))
}

#[cfg(test)]
pub(crate) async fn create_memory_catalog_service() -> std::sync::Arc<dyn CatalogService> {
    let svc = create_catalog_service(&Configuration::new("memory://"), &StoreClient::Memory).await;
    std::sync::Arc::from(svc)
}
