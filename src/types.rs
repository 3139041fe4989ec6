//! 核心类型定义 - 共享类型和常量

use std::fmt;

use crate::error::BenchError;

/// 每次调用的哈希次数，同时作为单次操作耗时的除数
pub const OPERATION_COUNT: usize = 1_000_000;

/// 支持的最小位数
pub const MIN_BITS: i32 = 1;

/// 支持的最大位数 (`1 << 30` 仍在 i32 正数范围内)
pub const MAX_BITS: i32 = 30;

/// 默认扫描的位数范围
pub const DEFAULT_BITS: [i32; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];

/// 表大小的位数，表大小为 `1 << bits`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Bits(i32);

impl Bits {
    /// 创建并校验位数
    pub fn new(bits: i32) -> Result<Self, BenchError> {
        if (MIN_BITS..=MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(BenchError::InvalidBits { bits })
        }
    }

    /// 原始位数
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// 对应的表大小
    #[inline]
    pub const fn table_size(self) -> TableSize {
        TableSize(1 << self.0)
    }
}

impl TryFrom<i32> for Bits {
    type Error = BenchError;

    fn try_from(bits: i32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 桶数量，始终是 2 的幂
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TableSize(i32);

impl TableSize {
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// 掩码 `size - 1`
    #[inline]
    pub const fn mask(self) -> i32 {
        self.0 - 1
    }

    pub fn is_power_of_two(self) -> bool {
        self.0 > 0 && (self.0 & (self.0 - 1)) == 0
    }
}

/// 哈希策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// 截断取模
    Modulo,
    /// 高16位异或后掩码
    JavaHash,
    /// 斐波那契乘法哈希
    FibHash,
}

impl HashKind {
    /// 报告中的输出顺序
    pub const ALL: [HashKind; 3] = [HashKind::Modulo, HashKind::JavaHash, HashKind::FibHash];

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            HashKind::Modulo => "moduloHash",
            HashKind::JavaHash => "javaHash",
            HashKind::FibHash => "fibHash",
        }
    }

    /// 是否依赖 `bits` 参数
    pub fn uses_bits(&self) -> bool {
        matches!(self, HashKind::FibHash)
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
