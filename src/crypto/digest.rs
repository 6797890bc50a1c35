//! SHA-2 摘要模块
//!
//! 对 `pepper ∥ input ∥ salt` 计算 SHA-256 / SHA-384 / SHA-512 摘要，
//! 输出小写十六进制字符串。适用于数据完整性校验等快速哈希场景，
//! **不适用于**密码存储（请使用 [`crate::crypto::pbkdf2`]）。
//!
//! ## 示例
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use hashrs::crypto::digest::{DigestOptions, HashAlgorithm, hash};
//!
//! let options = DigestOptions::new()
//!     .with_algorithm(HashAlgorithm::Sha512)
//!     .with_pepper("deployment-pepper")
//!     .with_salt("per-record-salt");
//!
//! let digest = hash("my-sensitive-data", &options).await.unwrap();
//! assert_eq!(digest.len(), 128);
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HashingConfig;
use crate::crypto::provider::{CryptoProvider, SystemProvider};
use crate::error::{Error, Result};

/// 支持的 SHA-2 摘要算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256，输出 32 字节
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384，输出 48 字节
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512，输出 64 字节
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// 全部支持的算法
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// 摘要输出长度（字节）
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// 十六进制输出长度（字符）
    pub fn hex_len(&self) -> usize {
        self.output_len() * 2
    }

    /// 规范名称，如 `"SHA-256"`
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// 解析算法名称，大小写不敏感，连字符可省略（`"sha512"` 与 `"SHA-512"` 等价）
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA384" => Ok(HashAlgorithm::Sha384),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// 摘要参数
///
/// 空字符串的 pepper / salt 等同于未提供，不会参与拼接。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestOptions {
    /// 摘要算法，默认 SHA-256
    pub algorithm: HashAlgorithm,
    /// 部署级别的密钥，拼接在输入之前
    pub pepper: Option<String>,
    /// 每条记录的盐值，拼接在输入之后
    pub salt: Option<String>,
}

impl DigestOptions {
    /// 创建默认参数（SHA-256，无 pepper，无 salt）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置算法
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// 设置 pepper
    pub fn with_pepper(mut self, pepper: impl Into<String>) -> Self {
        self.pepper = non_empty(pepper.into());
        self
    }

    /// 设置 salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = non_empty(salt.into());
        self
    }

    /// 构建待哈希文本：`pepper ∥ input ∥ salt`
    fn compose(&self, input: &str) -> String {
        let pepper = self.pepper.as_deref().unwrap_or("");
        let salt = self.salt.as_deref().unwrap_or("");

        let mut text = String::with_capacity(pepper.len() + input.len() + salt.len());
        text.push_str(pepper);
        text.push_str(input);
        text.push_str(salt);
        text
    }
}

impl From<&HashingConfig> for DigestOptions {
    /// 以配置中的默认算法为起点
    fn from(config: &HashingConfig) -> Self {
        Self::new().with_algorithm(config.default_algorithm)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// 摘要引擎
///
/// 无状态，可以在多个任务之间自由克隆和共享。
#[derive(Debug, Clone, Default)]
pub struct DigestEngine<P = SystemProvider> {
    provider: P,
}

impl DigestEngine<SystemProvider> {
    /// 使用系统提供者创建引擎
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CryptoProvider> DigestEngine<P> {
    /// 使用指定的提供者创建引擎
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// 计算摘要，返回小写十六进制字符串
    ///
    /// 相同的 `(input, algorithm, pepper, salt)` 总是得到相同的输出。
    ///
    /// # Errors
    ///
    /// 提供者拒绝输入时返回 [`Error::DigestComputation`]。
    pub async fn digest(&self, input: &str, options: &DigestOptions) -> Result<String> {
        let text = options.compose(input);
        let algorithm = options.algorithm;

        debug!(
            algorithm = algorithm.name(),
            peppered = options.pepper.is_some(),
            salted = options.salt.is_some(),
            "computing digest"
        );

        let bytes = self.provider.digest(algorithm, text.as_bytes())?;
        if bytes.len() != algorithm.output_len() {
            return Err(Error::digest(format!(
                "{} produced {} bytes, expected {}",
                algorithm,
                bytes.len(),
                algorithm.output_len()
            )));
        }

        Ok(hex::encode(bytes))
    }
}

/// 使用系统提供者计算摘要
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use hashrs::crypto::digest::{DigestOptions, hash};
///
/// let digest = hash("hello", &DigestOptions::default()).await.unwrap();
/// assert_eq!(digest.len(), 64);
/// # }
/// ```
pub async fn hash(input: &str, options: &DigestOptions) -> Result<String> {
    DigestEngine::new().digest(input, options).await
}

/// 按算法名称计算摘要
///
/// 名称无法识别时返回 [`Error::UnsupportedAlgorithm`]。
pub async fn hash_with(
    input: &str,
    algorithm: &str,
    pepper: Option<&str>,
    salt: Option<&str>,
) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let mut options = DigestOptions::new().with_algorithm(algorithm);
    if let Some(pepper) = pepper {
        options = options.with_pepper(pepper);
    }
    if let Some(salt) = salt {
        options = options.with_salt(salt);
    }
    hash(input, &options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TruncatingProvider;

    impl CryptoProvider for TruncatingProvider {
        fn fill_random(&self, _buf: &mut [u8]) -> Result<()> {
            Ok(())
        }

        fn digest(&self, _algorithm: HashAlgorithm, _data: &[u8]) -> Result<Vec<u8>> {
            Ok(vec![0u8; 4])
        }

        fn pbkdf2_hmac_sha256(&self, _: &[u8], _: &[u8], _: u32, _: &mut [u8]) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sha256_known_answer() {
        let digest = hash("abc", &DigestOptions::new()).await.unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn test_empty_input() {
        let digest = hash("", &DigestOptions::new()).await.unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn test_output_lengths() {
        for alg in HashAlgorithm::ALL {
            let options = DigestOptions::new().with_algorithm(alg);
            let digest = hash("data", &options).await.unwrap();
            assert_eq!(digest.len(), alg.hex_len());
            assert!(
                digest
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
        }
    }

    #[tokio::test]
    async fn test_concatenation_order() {
        // pepper ∥ input ∥ salt 等价于直接哈希拼接后的文本
        let options = DigestOptions::new().with_pepper("P").with_salt("S");
        let composed = hash("input", &options).await.unwrap();
        let direct = hash("PinputS", &DigestOptions::new()).await.unwrap();
        assert_eq!(composed, direct);
    }

    #[tokio::test]
    async fn test_empty_pepper_and_salt_are_absent() {
        let plain = hash("data", &DigestOptions::new()).await.unwrap();
        let options = DigestOptions::new().with_pepper("").with_salt("");
        assert_eq!(options.pepper, None);
        assert_eq!(options.salt, None);
        assert_eq!(hash("data", &options).await.unwrap(), plain);
    }

    #[derive(Clone)]
    struct FailingProvider;

    impl CryptoProvider for FailingProvider {
        fn fill_random(&self, _buf: &mut [u8]) -> Result<()> {
            Ok(())
        }

        fn digest(&self, _algorithm: HashAlgorithm, _data: &[u8]) -> Result<Vec<u8>> {
            Err(Error::digest("input rejected"))
        }

        fn pbkdf2_hmac_sha256(&self, _: &[u8], _: &[u8], _: u32, _: &mut [u8]) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let engine = DigestEngine::with_provider(FailingProvider);
        let options = DigestOptions::new().with_algorithm(HashAlgorithm::Sha512);
        let err = engine.digest("data", &options).await.unwrap_err();
        assert_eq!(err, Error::DigestComputation("input rejected".to_string()));
    }

    #[tokio::test]
    async fn test_wrong_width_from_provider() {
        let engine = DigestEngine::with_provider(TruncatingProvider);
        let err = engine.digest("data", &DigestOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::DigestComputation(_)));
    }

    #[tokio::test]
    async fn test_hash_with_unknown_algorithm() {
        let err = hash_with("data", "MD5", None, None).await.unwrap_err();
        assert_eq!(err, Error::UnsupportedAlgorithm("MD5".to_string()));
    }

    #[tokio::test]
    async fn test_options_from_config() {
        let config = HashingConfig::new().with_default_algorithm(HashAlgorithm::Sha384);
        let options = DigestOptions::from(&config);
        assert_eq!(options.algorithm, HashAlgorithm::Sha384);
        assert_eq!(hash("data", &options).await.unwrap().len(), 96);
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
        assert_eq!("Sha-512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert!("SHA-1".parse::<HashAlgorithm>().is_err());
        assert!("".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_properties() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
        assert_eq!(HashAlgorithm::Sha384.output_len(), 48);
        assert_eq!(HashAlgorithm::Sha512.output_len(), 64);
        assert_eq!(HashAlgorithm::Sha384.to_string(), "SHA-384");
    }
}
