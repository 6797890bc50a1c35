//! 安全随机数与盐生成模块
//!
//! 使用操作系统提供的密码学安全随机数生成器 (CSPRNG) 生成盐值。
//! 盐以标准 Base64（带填充）编码为文本，可以直接与哈希一起存储。

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::config::DEFAULT_SALT_LENGTH;
use crate::crypto::provider::{CryptoProvider, SystemProvider};
use crate::error::Result;

/// 生成指定长度的随机字节数组
///
/// # Errors
///
/// 系统随机数源不可用时返回 [`Error::EntropySourceUnavailable`](crate::Error::EntropySourceUnavailable)。
///
/// # Example
///
/// ```rust
/// use hashrs::random::generate_random_bytes;
///
/// let bytes = generate_random_bytes(32).unwrap();
/// assert_eq!(bytes.len(), 32);
/// ```
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    SystemProvider.fill_random(&mut bytes)?;
    Ok(bytes)
}

/// 生成 Base64 编码的随机盐
///
/// `length` 为随机字节数；`0` 返回空字符串。
///
/// # Example
///
/// ```rust
/// use hashrs::random::generate_salt;
///
/// let salt = generate_salt(16).unwrap();
/// assert_eq!(salt.len(), 24); // 16 字节 = 24 个 Base64 字符
/// assert_eq!(generate_salt(0).unwrap(), "");
/// ```
pub fn generate_salt(length: usize) -> Result<String> {
    SaltGenerator::new().with_length(length).generate()
}

/// 生成默认长度（16 字节）的盐
pub fn generate_default_salt() -> Result<String> {
    generate_salt(DEFAULT_SALT_LENGTH)
}

/// 盐生成器
///
/// ```rust
/// use hashrs::random::SaltGenerator;
///
/// let generator = SaltGenerator::new().with_length(32);
/// let salt = generator.generate().unwrap();
/// assert_eq!(salt.len(), 44);
/// ```
#[derive(Debug, Clone)]
pub struct SaltGenerator<P = SystemProvider> {
    provider: P,
    length: usize,
}

impl Default for SaltGenerator<SystemProvider> {
    fn default() -> Self {
        Self {
            provider: SystemProvider,
            length: DEFAULT_SALT_LENGTH,
        }
    }
}

impl SaltGenerator<SystemProvider> {
    /// 使用系统 CSPRNG 创建生成器
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CryptoProvider> SaltGenerator<P> {
    /// 使用指定的提供者创建生成器
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            length: DEFAULT_SALT_LENGTH,
        }
    }

    /// 设置随机字节数
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// 随机字节数
    pub fn length(&self) -> usize {
        self.length
    }

    /// 生成一个新的盐
    pub fn generate(&self) -> Result<String> {
        if self.length == 0 {
            return Ok(String::new());
        }

        let mut bytes = vec![0u8; self.length];
        self.provider.fill_random(&mut bytes)?;
        debug!(length = self.length, "generated salt");
        Ok(STANDARD.encode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::HashAlgorithm;

    #[derive(Clone)]
    struct FixedProvider(u8);

    impl CryptoProvider for FixedProvider {
        fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0);
            Ok(())
        }

        fn digest(&self, _: HashAlgorithm, _: &[u8]) -> Result<Vec<u8>> {
            unreachable!()
        }

        fn pbkdf2_hmac_sha256(&self, _: &[u8], _: &[u8], _: u32, _: &mut [u8]) -> Result<()> {
            unreachable!()
        }
    }

    #[derive(Clone)]
    struct BrokenProvider;

    impl CryptoProvider for BrokenProvider {
        fn fill_random(&self, _: &mut [u8]) -> Result<()> {
            Err(Error::entropy("no entropy"))
        }

        fn digest(&self, _: HashAlgorithm, _: &[u8]) -> Result<Vec<u8>> {
            unreachable!()
        }

        fn pbkdf2_hmac_sha256(&self, _: &[u8], _: &[u8], _: u32, _: &mut [u8]) -> Result<()> {
            unreachable!()
        }
    }

    #[test]
    fn test_generate_random_bytes() {
        let bytes = generate_random_bytes(32).unwrap();
        assert_eq!(bytes.len(), 32);

        // 两次生成不应相同
        let bytes2 = generate_random_bytes(32).unwrap();
        assert_ne!(bytes, bytes2);
    }

    #[test]
    fn test_generate_salt_unique() {
        let a = generate_salt(16).unwrap();
        let b = generate_salt(16).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 24);
    }

    #[test]
    fn test_generate_salt_zero() {
        assert_eq!(generate_salt(0).unwrap(), "");
    }

    #[test]
    fn test_generate_default_salt_decodes() {
        let salt = generate_default_salt().unwrap();
        let decoded = STANDARD.decode(&salt).unwrap();
        assert_eq!(decoded.len(), DEFAULT_SALT_LENGTH);
    }

    #[test]
    fn test_fixed_provider() {
        let generator = SaltGenerator::with_provider(FixedProvider(0xff)).with_length(3);
        assert_eq!(generator.generate().unwrap(), "////");
    }

    #[test]
    fn test_entropy_unavailable() {
        let generator = SaltGenerator::with_provider(BrokenProvider);
        let err = generator.generate().unwrap_err();
        assert!(matches!(err, Error::EntropySourceUnavailable(_)));
    }

    #[test]
    fn test_zero_length_skips_provider() {
        let generator = SaltGenerator::with_provider(BrokenProvider).with_length(0);
        assert_eq!(generator.generate().unwrap(), "");
    }
}
