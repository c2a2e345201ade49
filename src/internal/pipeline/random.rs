//! 随机数来源：只用于决定探测请求的长度，每次调用流水线取一次。

use async_trait::async_trait;
use rand::Rng;

#[async_trait]
pub trait RandomRange: Send + Sync {
    /// 返回 `[min, max)` 内的均匀随机数。
    async fn random_range(&self, min: u64, max: u64) -> u64;
}

/// 总是返回下界，即不做随机化。默认值，结果确定便于测试。
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRandom;

#[async_trait]
impl RandomRange for MinimumRandom {
    async fn random_range(&self, min: u64, _max: u64) -> u64 {
        min
    }
}

/// 基于线程本地 RNG 的均匀随机数；区间为空时返回下界。
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

#[async_trait]
impl RandomRange for ThreadRandom {
    async fn random_range(&self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    }
}
