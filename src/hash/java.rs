//! 异或折叠哈希 - 高16位异或进低位后按2的幂掩码

use crate::{hash::strategy::BucketHasher, types::HashKind};

/// `(x ^ (x >>> 16)) & (size - 1)`
///
/// 右移为逻辑右移 (补零)。`size` 必须是 2 的幂，`bits` 被忽略。
#[inline]
pub fn java_hash(x: i32, size: i32, _bits: i32) -> i32 {
    let spread = ((x as u32) >> 16) as i32;
    (x ^ spread) & (size - 1)
}

/// 异或折叠哈希器
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaHasher;

impl BucketHasher for JavaHasher {
    #[inline(always)]
    fn bucket(&self, x: i32, size: i32, bits: i32) -> i32 {
        java_hash(x, size, bits)
    }

    fn kind(&self) -> HashKind {
        HashKind::JavaHash
    }
}
