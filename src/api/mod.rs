use crate::api::error::ApiError;

pub(crate) mod client;
pub use client::ProxyPoolClient;
pub mod error;
pub mod types;

pub use types::{ProxyPage, ProxyRecord, StatsSnapshot};

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ProxyPoolApi: Send + Sync {
    /// Fetch the pool statistics.
    async fn get_stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Fetch one page of the proxy list.
    async fn get_proxies(&self, limit: u32, offset: u64) -> Result<ProxyPage, ApiError>;
}
