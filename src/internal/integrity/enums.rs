/// 子资源完整性可用的哈希算法。
///
/// 用户代理必须支持的最小集合：SHA-256、SHA-384、SHA-512。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityHashAlgo {
    Sha256,
    Sha384,
    Sha512,
}

impl IntegrityHashAlgo {
    pub const ALL: [IntegrityHashAlgo; 3] = [
        IntegrityHashAlgo::Sha256,
        IntegrityHashAlgo::Sha384,
        IntegrityHashAlgo::Sha512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrityHashAlgo::Sha256 => "sha256",
            IntegrityHashAlgo::Sha384 => "sha384",
            IntegrityHashAlgo::Sha512 => "sha512",
        }
    }

    /// 按名称匹配算法；未知名称（如 `sha1`）返回 `None`。
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.as_str() == name)
    }
}
