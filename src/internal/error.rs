//! 流水线错误类型。
//!
//! 可降级的情况（不支持 Range、Content-Range 不可见等）不走错误通道，
//! 而是由 [`PipelineOutcome::Unusable`](crate::pipeline::PipelineOutcome) 表示。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// 唯一对外暴露的失败类型：传输失败与完整性校验失败共用，
    /// 调用方无法区分是哪一项检查没通过，细节只写日志。
    #[error("请求失败")]
    Failed,

    /// 调用方违反前置条件（编程错误），不会重试。
    #[error("前置条件不满足: {0}")]
    Precondition(String),

    /// 206 分段的响应体长度与请求的范围不一致。
    #[error("分段 {start} 长度异常: 期望 {expected} 字节，实际 {actual} 字节")]
    SegmentLength {
        start: u64,
        expected: u64,
        actual: u64,
    },

    /// 分段未从上一段结束处接续，合并后会留下空洞。
    #[error("分段不连续: 期望从 {expected} 开始，实际从 {actual} 开始")]
    SegmentGap { expected: u64, actual: u64 },
}

impl FetchError {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }
}
