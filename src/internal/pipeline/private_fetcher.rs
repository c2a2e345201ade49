//! 隐藏资源大小的 fetch 包装器
//!
//! 对一次 GET 请求，先发随机长度的探测请求，再以固定大小、末段重叠的 Range 请求
//! 取回剩余部分，合并后（可选）做子资源完整性校验，最终返回一个合成的 `200 OK` 响应。
//! 被动的网络观察者只能看到统一大小的请求，无法据此推断资源真实长度。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use private_fetch::PrivateFetcher;
//! # use private_fetch::http::structs::{FetchRequest, ReqwestTransport};
//! # use private_fetch::pipeline::ThreadRandom;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = PrivateFetcher::new(ReqwestTransport::new()?).with_random(ThreadRandom);
//!
//! let request = FetchRequest::get("https://example.com/2M.dat")?
//!     .integrity("sha384-1lIqF875X4vaDs00Z4Rme8tgjhbPVuXzRe07BdC6fC+6C91jeBc7VsKobTeRO5Of");
//! let response = fetcher.fetch(request).await?;
//! assert_eq!(response.status().as_u16(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! ## 适用条件
//!
//! 仅 `GET`、没有自定义请求头、模式为 `cors`（或未指定）的请求走分段流水线；
//! 其它请求原样转发给传输层。
//!
//! ## 失败语义
//!
//! - 服务器不支持 Range 或 `Content-Range` 不可见：降级为一次普通整资源请求
//! - 中途某段不是 206：该段响应原样返回，已取回的分段丢弃
//! - 完整性校验失败：返回 [`FetchError::Failed`]，即使字节已完整取回

use std::sync::Arc;

use reqwest::Method;

use crate::internal::error::FetchError;
use crate::internal::http::enums::RequestMode;
use crate::internal::http::structs::fetch_request::FetchRequest;
use crate::internal::http::structs::fetch_response::FetchResponse;
use crate::internal::http::traits::transport::Transport;
use crate::internal::integrity::enums::IntegrityHashAlgo;
use crate::internal::integrity::functions::verify;
use crate::internal::integrity::structs::IntegrityHashFunctions;
use crate::internal::integrity::traits::HashFunction;
use crate::internal::pipeline::config::PrivateFetchConfig;
use crate::internal::pipeline::merger::merge_segments;
use crate::internal::pipeline::negotiator::fetch_initial_segment;
use crate::internal::pipeline::outcome::PipelineOutcome;
use crate::internal::pipeline::random::{MinimumRandom, RandomRange};
use crate::internal::pipeline::segment_fetcher::fetch_all_segments;
use crate::internal::pipeline::state::PipelineState;

pub struct PrivateFetcher<T: Transport> {
    transport: T,
    random: Arc<dyn RandomRange>,
    hash_functions: IntegrityHashFunctions,
    config: PrivateFetchConfig,
}

impl<T: Transport> PrivateFetcher<T> {
    /// 默认不做随机化，哈希使用 sha2。
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            random: Arc::new(MinimumRandom),
            hash_functions: IntegrityHashFunctions::default(),
            config: PrivateFetchConfig::default(),
        }
    }

    /// 设置探测长度使用的随机数来源。
    pub fn with_random(mut self, random: impl RandomRange + 'static) -> Self {
        self.random = Arc::new(random);
        self
    }

    /// 替换某个算法的哈希实现；未替换的算法仍使用默认实现。
    pub fn with_hash_function(
        mut self,
        algo: IntegrityHashAlgo,
        hash_fn: impl HashFunction + 'static,
    ) -> Self {
        self.hash_functions = self.hash_functions.with(algo, Arc::new(hash_fn));
        self
    }

    pub fn with_config(mut self, config: PrivateFetchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 请求是否适用分段流水线。
    pub fn is_eligible(request: &FetchRequest) -> bool {
        request.method == Method::GET
            && request.headers.is_empty()
            && request.mode.is_none_or(|mode| mode == RequestMode::Cors)
    }

    /// 执行请求。
    pub async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        if !Self::is_eligible(&request) {
            tracing::debug!(
                method = %request.method,
                mode = request.mode.map_or("unset", |m| m.as_str()),
                url = %request.url,
                "bypassing pipeline"
            );
            return self.transport.fetch(&request).await;
        }

        let mut state = PipelineState::Idle;

        advance(&mut state, PipelineState::Negotiating);
        let initial = match fetch_initial_segment(
            &self.transport,
            &request,
            self.random.as_ref(),
            &self.config,
        )
        .await?
        {
            PipelineOutcome::Usable(initial) => initial,
            PipelineOutcome::Unusable(response) => {
                advance(&mut state, PipelineState::Fallback);
                return Ok(response);
            }
        };
        let total_size = initial.total_size;

        advance(&mut state, PipelineState::FetchingSegments);
        let segments = match fetch_all_segments(&self.transport, &request, initial).await? {
            PipelineOutcome::Usable(segments) => segments,
            PipelineOutcome::Unusable(response) => {
                advance(&mut state, PipelineState::Fallback);
                return Ok(response);
            }
        };

        advance(&mut state, PipelineState::Merging);
        let response = merge_segments(segments, total_size)?;

        advance(&mut state, PipelineState::VerifyingIntegrity);
        // 空字符串等同于未设置
        let integrity = request.integrity.as_deref().filter(|v| !v.is_empty());
        if let Err(e) = verify(&response.body, integrity, &self.hash_functions).await {
            advance(&mut state, PipelineState::Fallback);
            return Err(e);
        }

        advance(&mut state, PipelineState::Done);
        Ok(response)
    }
}

fn advance(state: &mut PipelineState, next: PipelineState) {
    tracing::debug!(from = ?state, to = ?next, terminal = next.is_terminal(), "pipeline state");
    *state = next;
}
