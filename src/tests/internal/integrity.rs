//! 完整性描述解析、摘要与校验测试。

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha384};

use crate::FetchError;
use crate::integrity::{
    HashFunction, IntegrityHashAlgo, IntegrityHashFunctions, IntegrityMetadata, Sha2HashFunction,
    digest, parse_integrity, verify,
};

const SHA256_ABC: &str = "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=";

fn sha384_integrity(data: &[u8]) -> String {
    format!("sha384-{}", STANDARD.encode(Sha384::digest(data)))
}

/// 统计调用次数并返回固定摘要。
struct CountingHash {
    calls: Arc<AtomicUsize>,
    output: Vec<u8>,
}

#[async_trait]
impl HashFunction for CountingHash {
    async fn digest(&self, _data: &[u8]) -> Vec<u8> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output.clone()
    }
}

#[test]
fn parses_each_supported_algorithm() {
    let cases = [
        ("sha256-3N12U9wJn+OKjhNoyEmCk5k4bDwPiUzqCkEd5lZ4zX4=", IntegrityHashAlgo::Sha256),
        (
            "sha384-1lIqF875X4vaDs00Z4Rme8tgjhbPVuXzRe07BdC6fC+6C91jeBc7VsKobTeRO5Of",
            IntegrityHashAlgo::Sha384,
        ),
        (
            "sha512-2RJw+IML9cfH7bX7o03JVyPWS1rX3hrIIDkPu/ag2M8Nhvz/VIJWBOf3cAnrQddu3mdbgYbSPH2W5eoRO8Ii3A==",
            IntegrityHashAlgo::Sha512,
        ),
    ];

    for (value, algo) in cases {
        let (_, expected_digest) = value.split_once('-').unwrap();
        assert_eq!(
            parse_integrity(value).unwrap(),
            Some(IntegrityMetadata {
                algo,
                digest: expected_digest.to_string(),
            })
        );
    }
}

#[test]
fn unknown_algorithm_is_unparsable() {
    assert_eq!(
        parse_integrity("sha1-3N12U9wJn+OKjhNoyEmCk5k4bDwPiUzqCkEd5lZ4zX4=").unwrap(),
        None
    );
    assert_eq!(parse_integrity("sha42-abc").unwrap(), None);
}

#[test]
fn invalid_digest_is_unparsable() {
    assert_eq!(parse_integrity("sha384-!!!").unwrap(), None);
    assert_eq!(parse_integrity("sha384-").unwrap(), None);
    assert_eq!(parse_integrity("sha384-===").unwrap(), None);
    assert_eq!(
        parse_integrity("sha384-1lIqF875X4vaDs00Z4Rme8tgjhbPVuXzRe07BdC6fC+6C91jeBc7Vs==========")
            .unwrap(),
        None
    );
    assert_eq!(parse_integrity("sha256").unwrap(), None);
}

#[test]
fn empty_integrity_is_precondition_error() {
    assert!(matches!(parse_integrity(""), Err(FetchError::Precondition(_))));
}

#[tokio::test]
async fn digest_encodes_standard_base64() {
    let h = Sha2HashFunction(IntegrityHashAlgo::Sha256);
    assert_eq!(digest(&h, b"abc").await, SHA256_ABC);
}

#[tokio::test]
async fn verify_without_integrity_passes() {
    let fns = IntegrityHashFunctions::default();
    verify(b"anything", None, &fns).await.unwrap();
}

#[tokio::test]
async fn verify_accepts_matching_digest() {
    let fns = IntegrityHashFunctions::default();
    let data = b"the quick brown fox";
    verify(data, Some(&sha384_integrity(data)), &fns).await.unwrap();
    verify(b"abc", Some(&format!("sha256-{SHA256_ABC}")), &fns)
        .await
        .unwrap();
}

#[tokio::test]
async fn verify_rejects_mismatch_as_generic_failure() {
    let fns = IntegrityHashFunctions::default();
    let err = verify(b"tampered", Some(&sha384_integrity(b"original")), &fns)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Failed));
}

#[tokio::test]
async fn verify_rejects_unparsable_directive_as_generic_failure() {
    let fns = IntegrityHashFunctions::default();
    let err = verify(b"abc", Some("sha42-abc"), &fns).await.unwrap_err();
    assert!(matches!(err, FetchError::Failed));
}

#[tokio::test]
async fn verify_uses_registered_hash_function() {
    let calls = Arc::new(AtomicUsize::new(0));
    let fns = IntegrityHashFunctions::default().with(
        IntegrityHashAlgo::Sha512,
        Arc::new(CountingHash {
            calls: Arc::clone(&calls),
            output: vec![0xde, 0xad, 0xbe, 0xef],
        }),
    );

    verify(b"abc", Some("sha512-3q2+7w=="), &fns).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // 其余算法仍是默认实现
    verify(b"abc", Some(&format!("sha256-{SHA256_ABC}")), &fns)
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
