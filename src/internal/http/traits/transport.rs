//! 传输层 trait：流水线只依赖这一个能力，不关心底层用什么 HTTP 客户端。

use async_trait::async_trait;

use crate::internal::error::FetchError;
use crate::internal::http::structs::fetch_request::FetchRequest;
use crate::internal::http::structs::fetch_response::FetchResponse;

/// 执行单次请求并返回完整响应。
///
/// 超时、取消、连接复用等策略由实现方负责；流水线内部不重试。
/// 网络层面的失败应返回 [`FetchError::Failed`]。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError>;
}
