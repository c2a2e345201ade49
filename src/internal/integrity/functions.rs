//! 完整性描述解析与校验。
//!
//! 语法：`<algo>-<base64 摘要>`，`algo` 仅限 `sha256`/`sha384`/`sha512`，
//! 摘要为标准 base64 字母表，末尾最多两个 `=`。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::internal::error::FetchError;
use crate::internal::integrity::enums::IntegrityHashAlgo;
use crate::internal::integrity::structs::{IntegrityHashFunctions, IntegrityMetadata};
use crate::internal::integrity::traits::HashFunction;

/// 解析完整性描述。空字符串属于调用方错误返回 `Err`；无法解析返回 `Ok(None)`。
pub fn parse_integrity(value: &str) -> Result<Option<IntegrityMetadata>, FetchError> {
    if value.is_empty() {
        return Err(FetchError::precondition("integrity 值为空"));
    }

    let Some((name, digest)) = value.split_once('-') else {
        return Ok(None);
    };
    let Some(algo) = IntegrityHashAlgo::from_name(name) else {
        return Ok(None);
    };
    if !is_base64_digest(digest) {
        return Ok(None);
    }

    Ok(Some(IntegrityMetadata {
        algo,
        digest: digest.to_string(),
    }))
}

fn is_base64_digest(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    let padding = s.len() - body.len();
    !body.is_empty()
        && padding <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

/// 计算摘要并返回 base64 编码（标准字母表，带填充）。
pub async fn digest(hash_fn: &dyn HashFunction, data: &[u8]) -> String {
    STANDARD.encode(hash_fn.digest(data).await)
}

/// 校验字节是否与完整性描述一致；`integrity` 为 `None` 时直接通过。
///
/// 描述无法解析与摘要不匹配都返回 [`FetchError::Failed`]，与传输失败无法区分。
pub async fn verify(
    bytes: &[u8],
    integrity: Option<&str>,
    hash_functions: &IntegrityHashFunctions,
) -> Result<(), FetchError> {
    let Some(value) = integrity else {
        return Ok(());
    };

    let Some(metadata) = parse_integrity(value)? else {
        tracing::warn!("unparsable integrity metadata");
        return Err(FetchError::Failed);
    };

    let actual = digest(hash_functions.get(metadata.algo), bytes).await;
    if actual.as_bytes() != metadata.digest.as_bytes() {
        tracing::warn!(algo = metadata.algo.as_str(), "integrity digest mismatch");
        return Err(FetchError::Failed);
    }

    Ok(())
}
