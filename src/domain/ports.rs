use crate::domain::model::UpstreamPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> Result<SocketAddr>;
    fn upstream_url(&self) -> &str;
    fn upstream_timeout(&self) -> Option<Duration>;
}

/// Anything that can produce the current people-in-space list.
#[async_trait]
pub trait AstroSource: Send + Sync {
    async fn fetch(&self) -> Result<UpstreamPayload>;
}
