//! 分段流水线：协商 → 分段获取 → 合并 → 完整性校验。
//!
//! 各阶段都返回 [`outcome::PipelineOutcome`]，任一阶段得到 `Unusable`
//! 后续阶段都不再执行，原始响应原样返回给调用方。

pub mod config;
pub mod merger;
pub mod negotiator;
pub mod outcome;
pub mod private_fetcher;
pub mod random;
pub mod segment_fetcher;
pub mod state;
