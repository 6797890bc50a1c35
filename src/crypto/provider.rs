//! 密码学提供者抽象
//!
//! 安全随机数、SHA-2 摘要和 PBKDF2 都通过 [`CryptoProvider`] 获取，
//! 生产环境使用 [`SystemProvider`]，测试中可以注入确定性的实现。

use hmac::Hmac;
use rand::{TryRngCore, rngs::OsRng};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::crypto::digest::HashAlgorithm;
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// 密码学能力接口
///
/// 所有方法都是同步的纯计算；异步调度由上层引擎负责。
/// 实现必须是线程安全的，以便在阻塞线程池中执行。
pub trait CryptoProvider: Clone + Send + Sync + 'static {
    /// 使用密码学安全随机数填充缓冲区
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;

    /// 计算指定算法的摘要
    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// PBKDF2-HMAC-SHA256，结果写入 `out`
    fn pbkdf2_hmac_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()>;
}

/// 基于操作系统 CSPRNG 和 RustCrypto 的默认提供者
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl CryptoProvider for SystemProvider {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| Error::entropy(format!("{:?}", e)))
    }

    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let out = match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        };
        Ok(out)
    }

    fn pbkdf2_hmac_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()> {
        // PBKDF2 要求 c >= 1
        if iterations == 0 {
            return Err(Error::key_derivation("iteration count must be greater than 0"));
        }
        if out.is_empty() {
            return Err(Error::key_derivation("output length must be greater than 0"));
        }

        ::pbkdf2::pbkdf2::<HmacSha256>(password, salt, iterations, out)
            .map_err(|e| Error::key_derivation(e.to_string()))
    }
}
