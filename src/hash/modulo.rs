//! 取模哈希 - 经典的截断取余

use crate::{hash::strategy::BucketHasher, types::HashKind};

/// `x % size`
///
/// 使用 i32 的截断取余，余数符号跟随被除数，因此负键会得到负索引。
/// 取模不需要位数，`bits` 被有意忽略。
#[inline]
pub fn modulo_hash(x: i32, size: i32, _bits: i32) -> i32 {
    x % size
}

/// 取模哈希器
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuloHasher;

impl BucketHasher for ModuloHasher {
    #[inline(always)]
    fn bucket(&self, x: i32, size: i32, bits: i32) -> i32 {
        modulo_hash(x, size, bits)
    }

    fn kind(&self) -> HashKind {
        HashKind::Modulo
    }
}
