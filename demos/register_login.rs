//! 注册与登录示例
//!
//! 展示如何使用 HashRS 存储和验证密码凭据。
//!
//! 运行: RUST_LOG=hashrs=debug cargo run --example register_login

use std::collections::HashMap;

use hashrs::{DigestOptions, HashAlgorithm, HashingConfig, StoredCredential, hash};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> hashrs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== HashRS 注册与登录示例 ===\n");

    let config = HashingConfig::default();
    let mut users: HashMap<&str, StoredCredential> = HashMap::new();

    // 1. 注册
    println!("1. 注册用户 alice ({} 次迭代)", config.default_iterations);
    let credential = StoredCredential::create("correct horse battery staple", &config).await?;
    println!("   盐: {}", credential.salt);
    println!("   哈希: {}", credential.hash);
    users.insert("alice", credential);

    // 2. 登录
    println!("\n2. 登录");
    for attempt in ["correct horse battery staple", "Tr0ub4dor&3"] {
        let ok = match users.get("alice") {
            Some(credential) => credential.verify(attempt).await?,
            None => false,
        };
        println!("   密码 {:?}: {}", attempt, if ok { "✓ 成功" } else { "✗ 失败" });
    }

    // 3. 数据完整性摘要
    println!("\n3. 数据完整性摘要");
    let options = DigestOptions::new()
        .with_algorithm(HashAlgorithm::Sha512)
        .with_pepper("deployment-pepper");
    let digest = hash("my-sensitive-data", &options).await?;
    println!("   SHA-512: {}", digest);

    println!("\n=== 示例完成 ===");
    Ok(())
}
