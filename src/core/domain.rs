use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

// Configuration abstracts config options for the catalog service, it's loaded once at
// startup from the environment (and an optional .env file).
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub db_url: String,
    pub port: u16,
    pub log_level: String,
    pub table_prefix: String,
}

impl Configuration {
    pub fn new(db_url: &str) -> Self {
        Configuration {
            db_url: db_url.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            table_prefix: "".to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let db_url = lookup("DB_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| LibraryError::validation("missing environment variable DB_URL", None))?;
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid PORT {:?} {}", port, err).as_str(), None))?,
            None => DEFAULT_PORT,
        };
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if log_level.parse::<tracing::Level>().is_err() {
            return Err(LibraryError::validation(
                format!("invalid LOG_LEVEL {:?}", log_level).as_str(), None));
        }
        let config = Configuration {
            db_url,
            port,
            log_level,
            table_prefix: lookup("TABLE_PREFIX").unwrap_or_default(),
        };
        // reject unsupported connection strings before anything binds
        let _ = config.store()?;
        Ok(config)
    }

    pub fn store(&self) -> LibraryResult<RepositoryStore> {
        RepositoryStore::parse(self.db_url.as_str())
    }

    pub fn table_name(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix, name)
    }
}
