//! 分段获取：按顺序逐个发起剩余的 Range 请求。
//!
//! 严格串行，上一段响应分类完成后才发下一段；任一段不是 206 时整个流水线停止，
//! 已获取的分段全部丢弃，不做部分合并。

use reqwest::StatusCode;

use crate::internal::error::FetchError;
use crate::internal::http::structs::fetch_request::FetchRequest;
use crate::internal::http::traits::transport::Transport;
use crate::internal::pipeline::outcome::{
    InitialResponseSegment, PipelineOutcome, ResponseSegment,
};
use crate::internal::ranges::byte_range::ByteRange;
use crate::internal::ranges::segment_planner::{choose_segment_size, plan_ranges};

/// 请求单个分段；响应不是 206 时返回 `Unusable`，该响应原样交给调用方。
pub async fn fetch_one_segment(
    transport: &dyn Transport,
    request: &FetchRequest,
    range: ByteRange,
) -> Result<PipelineOutcome<ResponseSegment>, FetchError> {
    let response = transport.fetch(&request.with_range(&range)).await?;

    if response.status() != StatusCode::PARTIAL_CONTENT {
        tracing::warn!(
            start = range.start,
            end = range.end,
            status = %response.status(),
            "segment not answered with partial content"
        );
        return Ok(PipelineOutcome::Unusable(response));
    }

    tracing::debug!(start = range.start, end = range.end, "segment fetched");
    Ok(PipelineOutcome::Usable(ResponseSegment { response, range }))
}

/// 获取全部分段（含首段），按范围顺序返回。
pub async fn fetch_all_segments(
    transport: &dyn Transport,
    request: &FetchRequest,
    initial: InitialResponseSegment,
) -> Result<PipelineOutcome<Vec<ResponseSegment>>, FetchError> {
    let total_size = initial.total_size;
    let next_start = initial.segment.range.end + 1;
    let mut segments = vec![initial.segment];

    if next_start >= total_size {
        return Ok(PipelineOutcome::Usable(segments));
    }

    let segment_size = choose_segment_size(total_size);
    tracing::debug!(total_size, segment_size, next_start, "planning segments");

    for range in plan_ranges(total_size, segment_size, next_start)? {
        match fetch_one_segment(transport, request, range).await? {
            PipelineOutcome::Usable(segment) => segments.push(segment),
            PipelineOutcome::Unusable(response) => {
                return Ok(PipelineOutcome::Unusable(response));
            }
        }
    }

    Ok(PipelineOutcome::Usable(segments))
}
