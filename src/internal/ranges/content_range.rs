//! `Content-Range` 响应头解析（RFC 7233 §4.2）。
//!
//! 只接受 `bytes <first>-<last>/<complete-length>` 与 `bytes <first>-<last>/*` 两种形式。
//! 非法形态视为「没有拿到信息」而不是错误，调用方据此降级。

use crate::internal::error::FetchError;

/// 解析后的 `Content-Range`。满足 `last >= first`，且 `complete_size` 已知时 `complete_size > last`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteContentRange {
    pub first: u64,
    pub last: u64,
    pub complete_size: Option<u64>,
}

/// 解析 `Content-Range` 的值。
///
/// - 空字符串属于调用方错误，返回 `Err`
/// - 不符合语法、`last < first`、`complete_size <= last` 时返回 `Ok(None)`
pub fn parse_byte_content_range(value: &str) -> Result<Option<ByteContentRange>, FetchError> {
    if value.is_empty() {
        return Err(FetchError::precondition("Content-Range 值为空"));
    }

    Ok(parse_parts(value).filter(|range| {
        range.last >= range.first && range.complete_size.is_none_or(|size| size > range.last)
    }))
}

fn parse_parts(value: &str) -> Option<ByteContentRange> {
    let rest = value.strip_prefix("bytes ")?;
    let (range, complete) = rest.split_once('/')?;
    let (first, last) = range.split_once('-')?;

    let complete_size = match complete {
        "*" => None,
        n => Some(parse_digits(n)?),
    };

    Some(ByteContentRange {
        first: parse_digits(first)?,
        last: parse_digits(last)?,
        complete_size,
    })
}

/// 只接受纯 ASCII 数字（允许前导零），拒绝 `+`、空白等 `u64::from_str` 会放过的写法。
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
