//! 存储凭据
//!
//! 将盐、迭代次数和派生哈希打包成一个可序列化的记录，
//! 调用方在注册时创建并持久化，在登录时读回并验证。
//!
//! ## 示例
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() {
//! use hashrs::{HashingConfig, StoredCredential};
//!
//! let config = HashingConfig::new().with_default_iterations(1000);
//! let credential = StoredCredential::create("hunter2", &config).await.unwrap();
//!
//! assert!(credential.verify("hunter2").await.unwrap());
//! assert!(!credential.verify("hunter3").await.unwrap());
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::HashingConfig;
use crate::crypto::pbkdf2::KeyDerivationEngine;
use crate::error::Result;
use crate::random::SaltGenerator;

/// 持久化的密码凭据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    /// Base64 编码的盐
    pub salt: String,
    /// PBKDF2 迭代次数
    pub iterations: u32,
    /// 十六进制编码的派生哈希
    pub hash: String,
}

impl StoredCredential {
    /// 生成随机盐并派生哈希
    pub async fn create(password: &str, config: &HashingConfig) -> Result<Self> {
        config.validate()?;

        let salt = SaltGenerator::new()
            .with_length(config.salt_length)
            .generate()?;
        let iterations = config.default_iterations;
        let hash = KeyDerivationEngine::with_config(config.clone())
            .hash(password, &salt, iterations)
            .await?;

        Ok(Self {
            salt,
            iterations,
            hash,
        })
    }

    /// 验证密码
    ///
    /// 存储的哈希损坏时返回 `Ok(false)`。
    pub async fn verify(&self, password: &str) -> Result<bool> {
        KeyDerivationEngine::new()
            .verify(password, &self.salt, &self.hash, self.iterations)
            .await
    }

    /// 存储的迭代次数是否低于当前配置，需要在下次登录成功后重新哈希
    pub fn needs_rehash(&self, config: &HashingConfig) -> bool {
        self.iterations < config.default_iterations
    }
}
