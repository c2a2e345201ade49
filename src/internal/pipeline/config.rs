use crate::internal::bytes_unit::kibi_bytes;

/// 默认探测长度基数：1KB
pub const DEFAULT_PROBE_BASE_LEN: u64 = kibi_bytes(1);

/// 默认探测长度随机增量上限（不含）：1KB
pub const DEFAULT_PROBE_JITTER: u64 = kibi_bytes(1);

/// 流水线可调参数。
#[derive(Debug, Clone)]
pub struct PrivateFetchConfig {
    /// 探测请求长度 = `probe_base_len + random(0, probe_jitter)`
    pub probe_base_len: u64,
    pub probe_jitter: u64,
}

impl Default for PrivateFetchConfig {
    fn default() -> Self {
        Self {
            probe_base_len: DEFAULT_PROBE_BASE_LEN,
            probe_jitter: DEFAULT_PROBE_JITTER,
        }
    }
}
