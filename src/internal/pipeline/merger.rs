//! 合并分段：去掉每段开头的重叠字节，按偏移拼成完整响应体，并合成最终响应。

use bytes::BytesMut;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_LENGTH, HeaderValue};

use crate::internal::error::FetchError;
use crate::internal::http::structs::fetch_response::FetchResponse;
use crate::internal::pipeline::outcome::ResponseSegment;

/// 将按顺序排列的分段合并为一个 `200 OK` 响应。
///
/// 响应头取自第一段，`Content-Length` 改写为合并后的长度。
/// 每段必须恰好从上一段结束处接续（去掉 `redundant` 之后），且长度与其范围一致，
/// 保证结果中每个字节恰好写入一次。
pub fn merge_segments(
    segments: Vec<ResponseSegment>,
    total_size: u64,
) -> Result<FetchResponse, FetchError> {
    let Some(first) = segments.first() else {
        return Err(FetchError::precondition("没有可合并的分段"));
    };
    let mut headers = first.response.headers.clone();

    let capacity = usize::try_from(total_size)
        .map_err(|_| FetchError::precondition(format!("资源过大: {total_size} 字节")))?;
    let mut buf = BytesMut::with_capacity(capacity);
    let mut cursor: u64 = 0;

    for ResponseSegment { response, range } in segments {
        if range.redundant > range.len() {
            return Err(FetchError::precondition(format!(
                "redundant ({}) 超过范围长度 ({})",
                range.redundant,
                range.len()
            )));
        }
        let body = response.into_body();
        let actual = body.len() as u64;
        if actual != range.len() {
            return Err(FetchError::SegmentLength {
                start: range.start,
                expected: range.len(),
                actual,
            });
        }
        if range.effective_start() != cursor {
            return Err(FetchError::SegmentGap {
                expected: cursor,
                actual: range.effective_start(),
            });
        }

        let useful = &body[range.redundant as usize..];
        if cursor + useful.len() as u64 > total_size {
            return Err(FetchError::SegmentLength {
                start: range.start,
                expected: total_size - cursor,
                actual: useful.len() as u64,
            });
        }
        buf.extend_from_slice(useful);
        cursor += useful.len() as u64;
    }

    if cursor != total_size {
        return Err(FetchError::SegmentGap {
            expected: total_size,
            actual: cursor,
        });
    }

    headers.insert(CONTENT_LENGTH, HeaderValue::from(cursor));
    tracing::debug!(total_size, "segments merged");

    Ok(FetchResponse {
        status: StatusCode::OK,
        status_text: "OK".to_string(),
        headers,
        body: buf.freeze(),
    })
}
