//! 哈希函数 trait：每种算法一个实现，可由调用方替换。

use async_trait::async_trait;

#[async_trait]
pub trait HashFunction: Send + Sync {
    /// 计算原始摘要字节。
    async fn digest(&self, data: &[u8]) -> Vec<u8>;
}
