//! 基准测试配置

use std::time::Duration;

use crate::{
    error::BenchError,
    types::{HashKind, DEFAULT_BITS, OPERATION_COUNT},
};

/// 基准测试配置
///
/// 默认值：预热5轮、测量5轮、每轮至少1秒、每次调用一百万次哈希。
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// 预热轮数，结果丢弃
    pub warmup_iterations: usize,
    /// 测量轮数
    pub measurement_iterations: usize,
    /// 每轮最短持续时间
    pub iteration_time: Duration,
    /// 每次调用的哈希次数，键为 `0..operations`
    pub operations: usize,
    /// 扫描的位数，越界值只会跳过对应组合
    pub bits: Vec<i32>,
    /// 参与比较的策略
    pub kinds: Vec<HashKind>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 5,
            measurement_iterations: 5,
            iteration_time: Duration::from_secs(1),
            operations: OPERATION_COUNT,
            bits: DEFAULT_BITS.to_vec(),
            kinds: HashKind::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn with_warmup_iterations(mut self, iterations: usize) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    pub fn with_measurement_iterations(mut self, iterations: usize) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    pub fn with_iteration_time(mut self, time: Duration) -> Self {
        self.iteration_time = time;
        self
    }

    pub fn with_operations(mut self, operations: usize) -> Self {
        self.operations = operations;
        self
    }

    pub fn with_bits(mut self, bits: impl IntoIterator<Item = i32>) -> Self {
        self.bits = bits.into_iter().collect();
        self
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = HashKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// 组合总数
    pub fn combinations(&self) -> usize {
        self.bits.len() * self.kinds.len()
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.measurement_iterations == 0 {
            return Err(BenchError::InvalidConfig {
                reason: "测量轮数必须大于0".to_string(),
            });
        }
        if self.operations == 0 || self.operations > i32::MAX as usize {
            return Err(BenchError::InvalidConfig {
                reason: format!("每次调用的哈希次数必须在 1..={} 之间: {}", i32::MAX, self.operations),
            });
        }
        if self.bits.is_empty() {
            return Err(BenchError::InvalidConfig {
                reason: "位数列表为空".to_string(),
            });
        }
        if self.kinds.is_empty() {
            return Err(BenchError::InvalidConfig {
                reason: "策略列表为空".to_string(),
            });
        }
        Ok(())
    }
}
