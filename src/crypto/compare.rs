//! 常量时间比较

use subtle::ConstantTimeEq;

/// 常量时间比较两个等长字节切片
///
/// 由 `subtle` 遍历全部字节累积差异（带优化屏障），
/// 不会在第一个不匹配的位置提前返回，从而避免时序侧信道。
///
/// 长度不同时直接返回 `false`；长度本身不是秘密。
///
/// # Example
///
/// ```rust
/// use hashrs::crypto::compare::constant_time_eq;
///
/// assert!(constant_time_eq(b"secret_token", b"secret_token"));
/// assert!(!constant_time_eq(b"secret_token", b"secret_tokeN"));
/// ```
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
