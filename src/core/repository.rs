use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::ddb::build_db_client;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails with DuplicateKey if its key is already taken
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Memory,
}

impl RepositoryStore {
    // maps the DB_URL connection string onto a store
    pub fn parse(db_url: &str) -> LibraryResult<RepositoryStore> {
        let url = db_url.trim();
        if url.starts_with("memory:") {
            Ok(RepositoryStore::Memory)
        } else if url.starts_with("dynamodb:") || url.starts_with("aws:") {
            Ok(RepositoryStore::DynamoDB)
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Ok(RepositoryStore::LocalDynamoDB)
        } else {
            Err(LibraryError::validation(
                format!("unsupported DB_URL {:?}", url).as_str(), None))
        }
    }
}

// StoreClient is the process-wide store handle, acquired once at startup and shared by
// every repository. The DynamoDB client pools its connections internally so clones are cheap.
#[derive(Debug, Clone)]
pub enum StoreClient {
    DynamoDB(Client),
    LocalDynamoDB(Client),
    Memory,
}

impl StoreClient {
    pub async fn connect(config: &Configuration) -> LibraryResult<StoreClient> {
        let store = config.store()?;
        match store {
            RepositoryStore::DynamoDB => {
                Ok(StoreClient::DynamoDB(build_db_client(store, config.db_url.as_str()).await?))
            }
            RepositoryStore::LocalDynamoDB => {
                Ok(StoreClient::LocalDynamoDB(build_db_client(store, config.db_url.as_str()).await?))
            }
            RepositoryStore::Memory => Ok(StoreClient::Memory),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::{RepositoryStore, StoreClient};

    #[tokio::test]
    async fn test_should_parse_store() {
        assert_eq!(RepositoryStore::Memory, RepositoryStore::parse("memory://").unwrap());
        assert_eq!(RepositoryStore::DynamoDB, RepositoryStore::parse("dynamodb://us-east-1").unwrap());
        assert_eq!(RepositoryStore::DynamoDB, RepositoryStore::parse("aws://").unwrap());
        assert_eq!(RepositoryStore::LocalDynamoDB, RepositoryStore::parse("http://localhost:8000").unwrap());
        assert!(RepositoryStore::parse("postgres://localhost").is_err());
    }

    #[tokio::test]
    async fn test_should_connect_memory_store() {
        let client = StoreClient::connect(&Configuration::new("memory://")).await.expect("should connect");
        assert!(matches!(client, StoreClient::Memory));
    }
}
