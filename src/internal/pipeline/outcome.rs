use crate::internal::http::structs::fetch_response::FetchResponse;
use crate::internal::ranges::byte_range::ByteRange;

/// 流水线阶段结果：可继续，或不可用（携带应原样返回的响应）。
///
/// 不可用是预期内的分支，不是错误。
#[derive(Debug)]
pub enum PipelineOutcome<T> {
    Usable(T),
    Unusable(FetchResponse),
}

impl<T> PipelineOutcome<T> {
    pub fn is_usable(&self) -> bool {
        matches!(self, PipelineOutcome::Usable(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PipelineOutcome<U> {
        match self {
            PipelineOutcome::Usable(v) => PipelineOutcome::Usable(f(v)),
            PipelineOutcome::Unusable(res) => PipelineOutcome::Unusable(res),
        }
    }
}

/// 一个已获取的分段及产生它的范围。
#[derive(Debug)]
pub struct ResponseSegment {
    pub response: FetchResponse,
    pub range: ByteRange,
}

/// 探测请求得到的首段，额外带上资源完整大小。
#[derive(Debug)]
pub struct InitialResponseSegment {
    pub segment: ResponseSegment,
    pub total_size: u64,
}
