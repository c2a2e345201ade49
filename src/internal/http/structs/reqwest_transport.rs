use async_trait::async_trait;
use reqwest::Client;

use crate::internal::error::FetchError;
use crate::internal::http::structs::fetch_request::FetchRequest;
use crate::internal::http::structs::fetch_response::FetchResponse;
use crate::internal::http::traits::transport::Transport;

/// 基于 reqwest 的默认传输层实现。
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client, // 内部是Arc，clone 很便宜
}

impl ReqwestTransport {
    /// 使用默认配置创建 http 客户端
    pub fn new() -> Result<Self, String> {
        let client = Client::builder().build().map_err(|e| e.to_string())?;
        Ok(Self { client })
    }

    /// 复用调用方已配置好的客户端（代理、超时等）
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        let res = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, url = %request.url, "request failed");
                FetchError::Failed
            })?;

        let status = res.status();
        let headers = res.headers().clone();
        let body = res.bytes().await.map_err(|e| {
            tracing::debug!(error = %e, url = %request.url, "failed to read body");
            FetchError::Failed
        })?;

        Ok(FetchResponse::new(status, headers, body))
    }
}
