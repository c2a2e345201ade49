//! 分段规划：选择分段大小，并生成覆盖整个资源的 Range 列表。
//!
//! 除第一个探测请求外，所有请求大小一致；最后一段向前平移到资源末尾以内，
//! 与上一段重叠的字节记为 `redundant`，合并时丢弃。这样观察者无法从最后一段
//! 的大小推断资源真实长度，代价是多下载一次重叠部分。

use crate::internal::bytes_unit::{kibi_bytes, mebi_bytes};
use crate::internal::error::FetchError;
use crate::internal::ranges::byte_range::ByteRange;

/// 可选的分段大小，从大到小。
pub const SEGMENT_SIZES: [u64; 5] = [
    mebi_bytes(1),
    kibi_bytes(500),
    kibi_bytes(100),
    kibi_bytes(50),
    kibi_bytes(10),
];

/// 选择不超过 `content_length` 的最大分段大小；都不满足时整资源作为一段。
pub fn choose_segment_size(content_length: u64) -> u64 {
    SEGMENT_SIZES
        .into_iter()
        .find(|size| *size <= content_length)
        .unwrap_or(content_length)
}

/// 从 `segment_start` 开始请求 `segment_size` 字节时超出资源末尾、需要向前平移的字节数。
pub fn redundant_byte_count(
    content_length: u64,
    segment_size: u64,
    segment_start: u64,
) -> Result<u64, FetchError> {
    check_segment_size(content_length, segment_size)?;
    if segment_start >= content_length {
        return Err(FetchError::precondition(format!(
            "segment_start ({segment_start}) 必须小于 content_length ({content_length})"
        )));
    }
    Ok(redundant_unchecked(content_length, segment_size, segment_start))
}

/// 规划从 `start_index` 到资源末尾的全部 Range，返回按顺序产出、不可重启的迭代器。
pub fn plan_ranges(
    content_length: u64,
    segment_size: u64,
    start_index: u64,
) -> Result<SegmentRanges, FetchError> {
    if start_index >= content_length {
        return Err(FetchError::precondition(format!(
            "start_index ({start_index}) 必须小于 content_length ({content_length})"
        )));
    }
    check_segment_size(content_length, segment_size)?;
    if segment_size == 0 {
        return Err(FetchError::precondition("segment_size 不能为 0"));
    }

    Ok(SegmentRanges {
        content_length,
        segment_size,
        segment_start: start_index,
    })
}

/// [`plan_ranges`] 产出的 Range 序列。
#[derive(Debug)]
pub struct SegmentRanges {
    content_length: u64,
    segment_size: u64,
    segment_start: u64,
}

impl Iterator for SegmentRanges {
    type Item = ByteRange;

    fn next(&mut self) -> Option<ByteRange> {
        if self.segment_start >= self.content_length {
            return None;
        }

        let redundant =
            redundant_unchecked(self.content_length, self.segment_size, self.segment_start);
        let start = self.segment_start - redundant;
        let end = start + self.segment_size - 1;
        self.segment_start = end + 1;

        Some(ByteRange::new(start, end, redundant))
    }
}

fn check_segment_size(content_length: u64, segment_size: u64) -> Result<(), FetchError> {
    if segment_size > content_length {
        return Err(FetchError::precondition(format!(
            "segment_size ({segment_size}) 不能大于 content_length ({content_length})"
        )));
    }
    Ok(())
}

fn redundant_unchecked(content_length: u64, segment_size: u64, segment_start: u64) -> u64 {
    segment_size.saturating_sub(content_length - segment_start)
}
