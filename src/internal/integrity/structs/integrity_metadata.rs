use crate::internal::integrity::enums::IntegrityHashAlgo;

/// 解析后的完整性描述：`<algo>-<base64 摘要>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityMetadata {
    pub algo: IntegrityHashAlgo,
    /// 期望的 base64 摘要，保持原样用于逐字节比较
    pub digest: String,
}
