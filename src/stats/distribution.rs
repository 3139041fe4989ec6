//! 桶分布统计 - 检查哈希结果在各桶中的均匀程度

use crate::{
    error::BenchError,
    types::{Bits, HashKind},
};

/// 各桶命中次数
#[derive(Debug, Clone)]
pub struct BucketHistogram {
    kind: HashKind,
    bits: Bits,
    counts: Vec<u64>,
}

impl BucketHistogram {
    /// 统计 `keys` 在表大小 `1 << bits` 下的桶分布
    pub fn collect<I>(kind: HashKind, bits: Bits, keys: I) -> Result<Self, BenchError>
    where
        I: IntoIterator<Item = i32>,
    {
        let size = bits.table_size().get();
        let mut counts = vec![0u64; size as usize];

        for x in keys {
            let bucket = kind.hash(x, size, bits.get());
            if !(0..size).contains(&bucket) {
                return Err(BenchError::BucketOutOfRange { kind, bucket, size });
            }
            counts[bucket as usize] += 1;
        }

        Ok(Self { kind, bits, counts })
    }

    pub fn kind(&self) -> HashKind {
        self.kind
    }

    pub fn bits(&self) -> Bits {
        self.bits
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn min(&self) -> u64 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// 未命中的桶数量
    pub fn empty_buckets(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 0).count()
    }

    /// 最大桶与最小桶之比，存在空桶时为无穷大
    pub fn max_min_ratio(&self) -> f64 {
        match self.min() {
            0 => f64::INFINITY,
            min => self.max() as f64 / min as f64,
        }
    }
}
