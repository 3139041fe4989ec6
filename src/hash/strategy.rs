//! 哈希策略模块 - 定义桶定位策略

use crate::{
    hash::{fib_hash, java_hash, modulo_hash, FibonacciHasher, JavaHasher, ModuloHasher},
    types::HashKind,
};

/// 桶哈希特征
///
/// 所有实现都是零大小类型，在热循环中通过泛型静态分发。
pub trait BucketHasher: Copy + Send + Sync {
    /// 计算键 `x` 在大小为 `size` (= `1 << bits`) 的表中的桶索引
    fn bucket(&self, x: i32, size: i32, bits: i32) -> i32;

    /// 获取策略类型
    fn kind(&self) -> HashKind;
}

impl HashKind {
    /// 非热路径上按类型计算桶索引
    #[inline]
    pub fn hash(&self, x: i32, size: i32, bits: i32) -> i32 {
        match self {
            HashKind::Modulo => modulo_hash(x, size, bits),
            HashKind::JavaHash => java_hash(x, size, bits),
            HashKind::FibHash => fib_hash(x, size, bits),
        }
    }
}

/// 以具体哈希器类型调用 `f`
///
/// 运行器借此把运行时的 [`HashKind`] 转换成编译期类型，避免热循环中的虚调用。
pub trait HasherVisitor {
    type Output;

    fn visit<H: BucketHasher>(self, hasher: H) -> Self::Output;
}

/// 按类型分发到具体哈希器
pub fn dispatch<V: HasherVisitor>(kind: HashKind, visitor: V) -> V::Output {
    match kind {
        HashKind::Modulo => visitor.visit(ModuloHasher),
        HashKind::JavaHash => visitor.visit(JavaHasher),
        HashKind::FibHash => visitor.visit(FibonacciHasher),
    }
}
