use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::internal::integrity::enums::IntegrityHashAlgo;
use crate::internal::integrity::traits::HashFunction;

/// 基于 sha2 的默认哈希实现。
#[derive(Debug, Clone, Copy)]
pub struct Sha2HashFunction(pub IntegrityHashAlgo);

#[async_trait]
impl HashFunction for Sha2HashFunction {
    async fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self.0 {
            IntegrityHashAlgo::Sha256 => Sha256::digest(data).to_vec(),
            IntegrityHashAlgo::Sha384 => Sha384::digest(data).to_vec(),
            IntegrityHashAlgo::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// 每种算法各一个哈希函数。默认全部使用 [`Sha2HashFunction`]，可按算法单独替换。
#[derive(Clone)]
pub struct IntegrityHashFunctions {
    sha256: Arc<dyn HashFunction>,
    sha384: Arc<dyn HashFunction>,
    sha512: Arc<dyn HashFunction>,
}

impl Default for IntegrityHashFunctions {
    fn default() -> Self {
        Self {
            sha256: Arc::new(Sha2HashFunction(IntegrityHashAlgo::Sha256)),
            sha384: Arc::new(Sha2HashFunction(IntegrityHashAlgo::Sha384)),
            sha512: Arc::new(Sha2HashFunction(IntegrityHashAlgo::Sha512)),
        }
    }
}

impl IntegrityHashFunctions {
    /// 替换某个算法的实现，其余算法保持不变。
    pub fn with(mut self, algo: IntegrityHashAlgo, f: Arc<dyn HashFunction>) -> Self {
        match algo {
            IntegrityHashAlgo::Sha256 => self.sha256 = f,
            IntegrityHashAlgo::Sha384 => self.sha384 = f,
            IntegrityHashAlgo::Sha512 => self.sha512 = f,
        }
        self
    }

    pub fn get(&self, algo: IntegrityHashAlgo) -> &dyn HashFunction {
        match algo {
            IntegrityHashAlgo::Sha256 => self.sha256.as_ref(),
            IntegrityHashAlgo::Sha384 => self.sha384.as_ref(),
            IntegrityHashAlgo::Sha512 => self.sha512.as_ref(),
        }
    }
}

impl fmt::Debug for IntegrityHashFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrityHashFunctions")
            .field("algos", &IntegrityHashAlgo::ALL)
            .finish()
    }
}
