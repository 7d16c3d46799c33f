use crate::core::domain::Configuration;
use crate::core::repository::StoreClient;
use crate::products::repository::ddb_product_repository::{DDBProductRepository, PRODUCT_KEY};
use crate::products::repository::memory_product_repository::MemoryProductRepository;
use crate::products::repository::ProductRepository;
use crate::utils::ddb::create_table;

pub(crate) async fn create_product_repository(config: &Configuration, client: &StoreClient) -> Box<dyn ProductRepository> {
    let table_name = config.table_name("products");
    match client {
        StoreClient::DynamoDB(client) => {
            Box::new(DDBProductRepository::new(client.clone(), table_name.as_str()))
        }
        StoreClient::LocalDynamoDB(client) => {
            // the table usually exists already, creation failures are expected then
            let _ = create_table(client, table_name.as_str(), PRODUCT_KEY).await;
            Box::new(DDBProductRepository::new(client.clone(), table_name.as_str()))
        }
        StoreClient::Memory => {
            Box::new(MemoryProductRepository::new())
        }
    }
}
