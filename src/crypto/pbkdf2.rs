//! PBKDF2-HMAC-SHA256 密码派生模块
//!
//! 用于凭据存储的慢速、可调成本的密码哈希。调用方负责持久化
//! `{salt, iterations, hash}`，并在登录时用相同参数调用 [`verify_password`]。
//!
//! 在 tokio 运行时中，派生在阻塞线程池中执行，不会阻塞异步执行器；
//! 没有 tokio 运行时（例如由其他执行器驱动）时，在当前线程内联计算。
//! 丢弃返回的 future 不会中止已经开始的计算；需要超时的调用方
//! 应当用 `tokio::time::timeout` 包装并丢弃迟到的结果。
//!
//! ## 示例
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() {
//! use hashrs::crypto::pbkdf2::{derive_password_hash, verify_password};
//!
//! let hash = derive_password_hash("hunter2", "fixed-salt", 1000).await.unwrap();
//! assert_eq!(hash.len(), 64);
//!
//! assert!(verify_password("hunter2", "fixed-salt", &hash, 1000).await.unwrap());
//! assert!(!verify_password("hunter3", "fixed-salt", &hash, 1000).await.unwrap());
//! # }
//! ```

use std::fmt;

use tokio::runtime::Handle;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::HashingConfig;
use crate::crypto::compare::constant_time_eq;
use crate::crypto::provider::{CryptoProvider, SystemProvider};
use crate::error::{Error, Result};

/// 派生密钥长度（256 位）
pub const DERIVED_KEY_LEN: usize = 32;

/// PBKDF2 派生出的 256 位密钥
///
/// 离开作用域时自动清零。
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; DERIVED_KEY_LEN]);

impl DerivedKey {
    /// 原始字节
    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.0
    }

    /// 小写十六进制编码（64 个字符）
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

fn derive_blocking<P: CryptoProvider>(
    provider: &P,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    let mut out = [0u8; DERIVED_KEY_LEN];
    provider.pbkdf2_hmac_sha256(password, salt, iterations, &mut out)?;
    let key = DerivedKey(out);
    out.zeroize();
    Ok(key)
}

/// 密钥派生引擎
#[derive(Debug, Clone, Default)]
pub struct KeyDerivationEngine<P = SystemProvider> {
    provider: P,
    config: HashingConfig,
}

impl KeyDerivationEngine<SystemProvider> {
    /// 使用系统提供者和默认配置创建引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用系统提供者和指定配置创建引擎
    pub fn with_config(config: HashingConfig) -> Self {
        Self {
            provider: SystemProvider,
            config,
        }
    }
}

impl<P: CryptoProvider> KeyDerivationEngine<P> {
    /// 使用指定的提供者和配置创建引擎
    pub fn with_provider(provider: P, config: HashingConfig) -> Self {
        Self { provider, config }
    }

    /// 当前配置
    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    /// 派生 256 位密钥
    ///
    /// 相同输入总是得到相同输出。
    ///
    /// # Errors
    ///
    /// - 迭代次数低于 `config.min_iterations` 或为 0
    /// - 提供者拒绝计算
    pub async fn derive_key(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
    ) -> Result<DerivedKey> {
        if iterations < self.config.min_iterations {
            return Err(Error::key_derivation(format!(
                "iteration count {} is below the minimum of {}",
                iterations, self.config.min_iterations
            )));
        }
        if iterations < self.config.recommended_min_iterations {
            warn!(
                iterations,
                recommended = self.config.recommended_min_iterations,
                "PBKDF2 iteration count below recommended minimum"
            );
        }

        debug!(iterations, salt_len = salt.len(), "deriving password key");

        let provider = self.provider.clone();
        let password = Zeroizing::new(password.as_bytes().to_vec());
        let salt = salt.to_vec();

        let key = match Handle::try_current() {
            Ok(handle) => handle
                .spawn_blocking(move || derive_blocking(&provider, &password, &salt, iterations))
                .await
                .map_err(|e| Error::key_derivation(format!("derivation task failed: {}", e)))??,
            Err(_) => {
                debug!("no tokio runtime, deriving on the current thread");
                derive_blocking(&provider, &password, &salt, iterations)?
            }
        };

        Ok(key)
    }

    /// 派生密码哈希，返回 64 个字符的小写十六进制字符串
    ///
    /// 盐以 UTF-8 字节参与计算。
    pub async fn hash(&self, password: &str, salt: &str, iterations: u32) -> Result<String> {
        let key = self.derive_key(password, salt.as_bytes(), iterations).await?;
        Ok(key.to_hex())
    }

    /// 使用配置中的默认迭代次数派生密码哈希
    pub async fn hash_with_default_iterations(&self, password: &str, salt: &str) -> Result<String> {
        self.hash(password, salt, self.config.default_iterations)
            .await
    }

    /// 验证密码
    ///
    /// 使用与 [`hash`](Self::hash) 相同的路径重新派生，并与存储的哈希做常量时间比较。
    ///
    /// 存储的哈希格式错误（奇数长度、非十六进制字符）或解码后长度不是 32 字节时
    /// 返回 `Ok(false)`；只有派生本身的失败才会返回错误。
    pub async fn verify(
        &self,
        password: &str,
        salt: &str,
        stored_hash: &str,
        iterations: u32,
    ) -> Result<bool> {
        let derived = self.derive_key(password, salt.as_bytes(), iterations).await?;

        let stored = match hex::decode(stored_hash) {
            Ok(bytes) => Zeroizing::new(bytes),
            Err(e) => {
                warn!(error = %e, "stored password hash is not valid hex");
                return Ok(false);
            }
        };

        if stored.len() != DERIVED_KEY_LEN {
            warn!(
                stored_len = stored.len(),
                expected = DERIVED_KEY_LEN,
                "stored password hash has unexpected length"
            );
            return Ok(false);
        }

        Ok(constant_time_eq(derived.as_bytes(), &stored))
    }
}

/// 使用系统提供者派生密码哈希
pub async fn derive_password_hash(password: &str, salt: &str, iterations: u32) -> Result<String> {
    KeyDerivationEngine::new()
        .hash(password, salt, iterations)
        .await
}

/// 使用系统提供者验证密码
pub async fn verify_password(
    password: &str,
    salt: &str,
    stored_hash: &str,
    iterations: u32,
) -> Result<bool> {
    KeyDerivationEngine::new()
        .verify(password, salt, stored_hash, iterations)
        .await
}
