//! # HashRS
//!
//! 安全的单向哈希与密码验证原语。
//!
//! ## 功能特性
//!
//! - **摘要**: SHA-256 / SHA-384 / SHA-512，支持 pepper 与 salt，用于数据完整性校验
//! - **密码派生**: PBKDF2-HMAC-SHA256，可调迭代次数，用于凭据存储
//! - **常量时间验证**: 防止通过响应时间推断不匹配的位置
//! - **安全随机盐**: 基于操作系统 CSPRNG 的 Base64 盐
//!
//! 本库只负责计算。盐、迭代次数和哈希的持久化，以及传输、会话和
//! 验证尝试的速率限制都由调用方负责。
//!
//! ## 摘要示例
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() {
//! use hashrs::{DigestOptions, HashAlgorithm, hash};
//!
//! let options = DigestOptions::new().with_algorithm(HashAlgorithm::Sha512);
//! let a = hash("my-sensitive-data", &options).await.unwrap();
//! let b = hash("my-sensitive-data", &options).await.unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 128);
//! # }
//! ```
//!
//! ## 密码哈希示例
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() {
//! use hashrs::{derive_password_hash, generate_salt, verify_password};
//!
//! // 注册：生成盐并派生哈希，持久化 {salt, iterations, hash}
//! let salt = generate_salt(16).unwrap();
//! let hash = derive_password_hash("hunter2", &salt, 1000).await.unwrap();
//!
//! // 登录：用相同的盐与迭代次数验证
//! assert!(verify_password("hunter2", &salt, &hash, 1000).await.unwrap());
//! assert!(!verify_password("hunter3", &salt, &hash, 1000).await.unwrap());
//! # }
//! ```

pub mod config;
pub mod credential;
pub mod crypto;
pub mod error;
pub mod random;

pub use error::{Error, Result};

// ============================================================================
// 配置与凭据导出
// ============================================================================

pub use config::{DEFAULT_ITERATIONS, DEFAULT_SALT_LENGTH, HashingConfig};
pub use credential::StoredCredential;

// ============================================================================
// 密码学原语导出
// ============================================================================

pub use crypto::{
    CryptoProvider, DerivedKey, DigestEngine, DigestOptions, HashAlgorithm, KeyDerivationEngine,
    SystemProvider, constant_time_eq, derive_password_hash, hash, hash_with, verify_password,
};

// ============================================================================
// 随机数生成函数导出
// ============================================================================

pub use random::{SaltGenerator, generate_default_salt, generate_random_bytes, generate_salt};
