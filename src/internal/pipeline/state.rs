/// 流水线状态。每次调用只会到达一个终态（`Done` 或 `Fallback`），不重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Negotiating,
    FetchingSegments,
    Merging,
    VerifyingIntegrity,
    Done,
    Fallback,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Fallback)
    }
}
