//! 斐波那契哈希 - 乘以黄金分割常数后取高位
//!
//! 参见 <https://probablydance.com/2018/06/16/fibonacci-hashing-the-optimization-that-the-world-forgot-or-a-better-alternative-to-integer-modulo/>

use crate::{hash::strategy::BucketHasher, types::HashKind};

/// 2^30 / 黄金分割率 (1.61803398875)，向下取整
///
/// 2^30 是表的最大容量。不可替换为其他常数。
pub const FIB_MULTIPLIER: u32 = 663_608_942;

/// `(x * 663608942) >>> (32 - bits)`
///
/// 32 位无符号回绕乘法后逻辑右移，结果恰好有 `bits` 个有效位。
/// `size` 被忽略，`bits` 必须在 `1..=31` 之间。
#[inline]
pub fn fib_hash(x: i32, _size: i32, bits: i32) -> i32 {
    ((x as u32).wrapping_mul(FIB_MULTIPLIER) >> (32 - bits)) as i32
}

/// 斐波那契哈希器
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciHasher;

impl BucketHasher for FibonacciHasher {
    #[inline(always)]
    fn bucket(&self, x: i32, size: i32, bits: i32) -> i32 {
        fib_hash(x, size, bits)
    }

    fn kind(&self) -> HashKind {
        HashKind::FibHash
    }
}
