use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FetchResult;

/// Everything a client needs to build requests, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub query_field: String,
    pub api_key: String,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> ClientSettings {
        return ClientSettings {
            endpoint: config.get(ConfigKey::Endpoint),
            query_field: config.get(ConfigKey::QueryField),
            api_key: config.get(ConfigKey::ApiKey),
        };
    }
}

#[async_trait]
pub trait RequestClient: Send + Sync {
    /// Performs one request for `query`. Every failure is folded into `FetchResult::Failure`.
    async fn fetch(&self, query: &str) -> FetchResult;
}

pub type RequestClientBox = Box<dyn RequestClient>;
