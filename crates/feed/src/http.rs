use async_trait::async_trait;
use kboard_core::config::BackendConfig;
use kboard_core::market::entity::{QuoteReply, UpdateReply};
use kboard_core::market::error::FeedError;
use kboard_core::market::port::MarketBackend;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// # Summary
/// 基于 HTTP 的后端实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯，超时由构造参数决定。
/// - `base_url` 不带末尾斜杠。
#[derive(Clone)]
pub struct HttpBackend {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// 后端根地址
    base_url: String,
}

impl HttpBackend {
    /// # Summary
    /// 创建一个新的 HttpBackend 实例。
    ///
    /// # Logic
    /// 1. 确保进程级 rustls 加密提供者已安装。
    /// 2. 设置超时与 `Accept: application/json` 默认 Header。
    /// 3. 初始化 reqwest 客户端。
    ///
    /// # Arguments
    /// * `base_url`: 后端根地址，例如 `http://127.0.0.1:5000`。
    /// * `timeout`: 单次请求超时。
    ///
    /// # Returns
    /// 成功返回实例，客户端构建失败返回 `FeedError::Network`。
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 按配置段构建。
    pub fn from_config(config: &BackendConfig) -> Result<Self, FeedError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Summary
    /// 发起 GET 请求并把响应体解析为 JSON。
    ///
    /// # Logic
    /// 1. 拼接完整 URL 并发送请求，传输失败映射为 `Network`。
    /// 2. 非 2xx 状态映射为 `Status`。
    /// 3. 响应体无法解析映射为 `Parse`。
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status().as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MarketBackend for HttpBackend {
    async fn fetch_realtime(&self, code: &str) -> Result<QuoteReply, FeedError> {
        self.get_json(&format!("/api/realtime/{}", code)).await
    }

    async fn request_update(&self, code: &str) -> Result<UpdateReply, FeedError> {
        self.get_json(&format!("/update/{}", code)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let backend = HttpBackend::new("http://127.0.0.1:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(backend.base_url(), "http://127.0.0.1:5000");
    }
}
