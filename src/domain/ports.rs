use crate::domain::model::ApiResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
}

/// action 與 HTTP 之間的接縫
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse>;
}
