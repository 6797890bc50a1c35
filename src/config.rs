//! 哈希参数配置
//!
//! ## 示例
//!
//! ```rust
//! use hashrs::config::HashingConfig;
//!
//! // 默认配置：宽松模式，只拒绝 0 次迭代
//! let config = HashingConfig::default();
//! assert_eq!(config.default_iterations, 600_000);
//!
//! // 严格配置：至少 1000 次迭代，32 字节盐
//! let strict = HashingConfig::strict();
//! assert!(strict.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::crypto::digest::HashAlgorithm;
use crate::error::{Error, Result};

/// 默认 PBKDF2 迭代次数
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// 默认盐长度（字节）
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// 哈希配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// 未显式指定时使用的 PBKDF2 迭代次数
    pub default_iterations: u32,

    /// 允许的最小迭代次数（低于此值直接拒绝）
    pub min_iterations: u32,

    /// 建议的最小迭代次数（低于此值仅记录警告）
    pub recommended_min_iterations: u32,

    /// 生成盐的长度（字节）
    pub salt_length: usize,

    /// 摘要的默认算法
    pub default_algorithm: HashAlgorithm,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            default_iterations: DEFAULT_ITERATIONS,
            min_iterations: 1,
            recommended_min_iterations: 100_000,
            salt_length: DEFAULT_SALT_LENGTH,
            default_algorithm: HashAlgorithm::Sha256,
        }
    }
}

impl HashingConfig {
    /// 创建新的配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 严格配置：拒绝少于 1000 次的迭代，使用 32 字节盐
    pub fn strict() -> Self {
        Self {
            min_iterations: 1000,
            salt_length: 32,
            ..Self::default()
        }
    }

    /// 设置默认迭代次数
    pub fn with_default_iterations(mut self, iterations: u32) -> Self {
        self.default_iterations = iterations;
        self
    }

    /// 设置最小迭代次数
    pub fn with_min_iterations(mut self, iterations: u32) -> Self {
        self.min_iterations = iterations;
        self
    }

    /// 设置建议的最小迭代次数
    pub fn with_recommended_min_iterations(mut self, iterations: u32) -> Self {
        self.recommended_min_iterations = iterations;
        self
    }

    /// 设置盐长度
    pub fn with_salt_length(mut self, length: usize) -> Self {
        self.salt_length = length;
        self
    }

    /// 设置默认摘要算法
    pub fn with_default_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.default_algorithm = algorithm;
        self
    }

    /// 校验配置的一致性
    pub fn validate(&self) -> Result<()> {
        if self.min_iterations == 0 {
            return Err(Error::config(
                "min_iterations",
                "must be greater than 0",
            ));
        }
        if self.default_iterations < self.min_iterations {
            return Err(Error::config(
                "default_iterations",
                format!(
                    "{} is below min_iterations {}",
                    self.default_iterations, self.min_iterations
                ),
            ));
        }
        Ok(())
    }
}
