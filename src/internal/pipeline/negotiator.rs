//! 探测请求：以随机长度请求资源开头，判断服务器是否支持可用的 Range 语义。
//!
//! 以下任一情况都视为不可用，改为发起一次不带请求头的整资源请求作为降级结果：
//! - 响应不是 206
//! - 206 但看不到 `Content-Range`（可能被 CORS 隐藏，无法与服务器不支持区分）
//! - `Content-Range` 无法解析，或完整大小未知（`*`）

use reqwest::StatusCode;
use reqwest::header::CONTENT_RANGE;

use crate::internal::error::FetchError;
use crate::internal::http::structs::fetch_request::FetchRequest;
use crate::internal::http::traits::transport::Transport;
use crate::internal::pipeline::config::PrivateFetchConfig;
use crate::internal::pipeline::outcome::{
    InitialResponseSegment, PipelineOutcome, ResponseSegment,
};
use crate::internal::pipeline::random::RandomRange;
use crate::internal::ranges::byte_range::ByteRange;
use crate::internal::ranges::content_range::parse_byte_content_range;

/// 计算探测请求长度：`probe_base_len + random(0, probe_jitter)`。
pub async fn probe_length(config: &PrivateFetchConfig, random: &dyn RandomRange) -> u64 {
    config.probe_base_len + random.random_range(0, config.probe_jitter).await
}

/// 发起探测请求并分类服务器的 Range 能力。
pub async fn fetch_initial_segment(
    transport: &dyn Transport,
    request: &FetchRequest,
    random: &dyn RandomRange,
    config: &PrivateFetchConfig,
) -> Result<PipelineOutcome<InitialResponseSegment>, FetchError> {
    let probe_len = probe_length(config, random).await;
    if probe_len == 0 {
        return Err(FetchError::precondition("探测请求长度不能为 0"));
    }

    let probe = ByteRange::new(0, probe_len - 1, 0);
    tracing::debug!(probe_len, url = %request.url, "sending probe request");
    let response = transport.fetch(&request.with_range(&probe)).await?;

    if response.status() != StatusCode::PARTIAL_CONTENT {
        tracing::warn!(status = %response.status(), "probe not answered with partial content");
        return fallback(transport, request).await;
    }

    // 看不到与看到空值同样处理
    let Some(content_range) = response.header(CONTENT_RANGE.as_str()).filter(|v| !v.is_empty())
    else {
        tracing::warn!("Content-Range is not exposed");
        return fallback(transport, request).await;
    };

    let parsed = parse_byte_content_range(content_range)?;
    let Some((range, total_size)) =
        parsed.and_then(|r| r.complete_size.map(|size| (r, size)))
    else {
        tracing::warn!(content_range, "Content-Range unusable");
        return fallback(transport, request).await;
    };

    tracing::debug!(
        first = range.first,
        last = range.last,
        total_size,
        "probe accepted"
    );

    Ok(PipelineOutcome::Usable(InitialResponseSegment {
        segment: ResponseSegment {
            response,
            range: ByteRange::new(range.first, range.last, 0),
        },
        total_size,
    }))
}

/// 降级：重新发起不带任何请求头的整资源请求，原样返回。
async fn fallback<T>(
    transport: &dyn Transport,
    request: &FetchRequest,
) -> Result<PipelineOutcome<T>, FetchError> {
    let response = transport.fetch(&request.without_headers()).await?;
    Ok(PipelineOutcome::Unusable(response))
}
