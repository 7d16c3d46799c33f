use crate::core::domain::Configuration;
use crate::core::library::ListKind;
use crate::core::repository::StoreClient;
use crate::lists::domain::ListService;
use crate::lists::domain::service::ListServiceImpl;
use crate::lists::repository::ddb_list_repository::{DDBListRepository, ENTRY_KEY};
use crate::lists::repository::memory_list_repository::MemoryListRepository;
use crate::lists::repository::ListRepository;
use crate::utils::ddb::create_table;

pub(crate) async fn create_list_repository(config: &Configuration, kind: ListKind, client: &StoreClient) -> Box<dyn ListRepository> {
    let table_name = config.table_name(kind.table_name());
    match client {
        StoreClient::DynamoDB(client) => {
            Box::new(DDBListRepository::new(client.clone(), table_name.as_str(), kind))
        }
        StoreClient::LocalDynamoDB(client) => {
            let _ = create_table(client, table_name.as_str(), ENTRY_KEY).await;
            Box::new(DDBListRepository::new(client.clone(), table_name.as_str(), kind))
        }
        StoreClient::Memory => {
            Box::new(MemoryListRepository::new(kind))
        }
    }
}

pub(crate) async fn create_list_service(config: &Configuration, kind: ListKind, client: &StoreClient) -> Box<dyn ListService> {
    let list_repo = create_list_repository(config, kind, client).await;
    Box::new(ListServiceImpl::new(config, kind, list_repo))
}

#[cfg(test)]
pub(crate) async fn create_memory_list_service(kind: ListKind) -> std::sync::Arc<dyn ListService> {
    let svc = create_list_service(&Configuration::new("memory://"), kind, &StoreClient::Memory).await;
    std::sync::Arc::from(svc)
}
