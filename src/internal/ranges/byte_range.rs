//! 单次 Range 请求的字节范围。

/// 闭区间 `[start, end]`；`redundant` 为响应体开头需要丢弃的字节数（与上一段重叠的部分）。
///
/// 满足 `start <= end` 且 `redundant <= len()`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
    pub redundant: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64, redundant: u64) -> Self {
        Self {
            start,
            end,
            redundant,
        }
    }

    /// 该范围请求的字节数（含重叠部分）。
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// 去掉重叠后真正贡献给整体的第一个字节偏移。
    pub fn effective_start(&self) -> u64 {
        self.start + self.redundant
    }

    /// 生成 `Range` 请求头的值：`bytes=start-end`。
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}
