//! 密码学原语模块
//!
//! ## 功能
//!
//! - **摘要**: SHA-256 / SHA-384 / SHA-512，支持 pepper 与 salt
//! - **密码派生**: PBKDF2-HMAC-SHA256，常量时间验证
//! - **常量时间比较**: 防止时序攻击
//! - **提供者抽象**: 随机数与摘要能力可注入，便于测试
//!
//! ## 示例
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() {
//! use hashrs::crypto::{DigestOptions, HashAlgorithm, derive_password_hash, hash};
//!
//! let digest = hash("data", &DigestOptions::new().with_algorithm(HashAlgorithm::Sha384))
//!     .await
//!     .unwrap();
//! assert_eq!(digest.len(), 96);
//!
//! let password_hash = derive_password_hash("password", "salt", 1000).await.unwrap();
//! assert_eq!(password_hash.len(), 64);
//! # }
//! ```

pub mod compare;
pub mod digest;
pub mod pbkdf2;
pub mod provider;

pub use compare::constant_time_eq;
pub use digest::{DigestEngine, DigestOptions, HashAlgorithm, hash, hash_with};
pub use self::pbkdf2::{
    DERIVED_KEY_LEN, DerivedKey, KeyDerivationEngine, derive_password_hash, verify_password,
};
pub use provider::{CryptoProvider, SystemProvider};
