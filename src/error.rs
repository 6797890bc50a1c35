//! 统一错误类型模块
//!
//! 提供 hashrs 库中所有操作的错误类型定义。
//!
//! 注意：验证密码时遇到格式错误的存储哈希**不是**错误，
//! [`verify_password`](crate::verify_password) 会直接返回 `Ok(false)`。

use thiserror::Error as ThisError;

/// hashrs 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// hashrs 库的错误类型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 系统安全随机数源不可用（致命，不重试）
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// 请求了不支持的摘要算法
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// 摘要计算失败
    #[error("digest computation failed: {0}")]
    DigestComputation(String),

    /// 密钥派生失败（迭代次数被拒绝、任务中断等）
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// 配置错误
    #[error("invalid configuration value for '{key}': {message}")]
    Config {
        /// 配置项名称
        key: String,
        /// 错误描述
        message: String,
    },
}

impl Error {
    /// 创建一个随机数源错误
    pub fn entropy(msg: impl Into<String>) -> Self {
        Error::EntropySourceUnavailable(msg.into())
    }

    /// 创建一个密钥派生错误
    pub fn key_derivation(msg: impl Into<String>) -> Self {
        Error::KeyDerivation(msg.into())
    }

    /// 创建一个摘要计算错误
    pub fn digest(msg: impl Into<String>) -> Self {
        Error::DigestComputation(msg.into())
    }

    /// 创建一个配置错误
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}
