//! 样本记录器 - 累积每轮的单次操作耗时

use std::time::Duration;

/// 单轮测量样本
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSample {
    /// 本轮总耗时
    pub elapsed: Duration,
    /// 本轮完成的调用次数 (每次调用包含 `operations` 次哈希)
    pub invocations: u64,
    /// 每次调用的哈希次数
    pub operations: u64,
}

impl CycleSample {
    /// 本轮的平均单次哈希耗时 (纳秒)
    pub fn ns_per_op(&self) -> f64 {
        let ops = self.invocations.saturating_mul(self.operations);
        if ops == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / ops as f64
    }
}

/// 样本统计快照
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleSummary {
    pub cycles: usize,
    pub mean_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub stddev_ns: f64,
}

/// 样本记录接口
pub trait SampleRecorder {
    /// 记录一轮样本
    fn record(&mut self, sample: CycleSample);

    /// 获取统计快照
    fn snapshot(&self) -> SampleSummary;

    /// 重置统计
    fn reset(&mut self);
}

/// 测量阶段使用的记录器
#[derive(Debug, Default, Clone)]
pub struct CycleStats {
    ns_per_op: Vec<f64>,
}

impl CycleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cycles: usize) -> Self {
        Self {
            ns_per_op: Vec::with_capacity(cycles),
        }
    }
}

impl SampleRecorder for CycleStats {
    fn record(&mut self, sample: CycleSample) {
        self.ns_per_op.push(sample.ns_per_op());
    }

    fn snapshot(&self) -> SampleSummary {
        let n = self.ns_per_op.len();
        if n == 0 {
            return SampleSummary::default();
        }

        let mean = self.ns_per_op.iter().sum::<f64>() / n as f64;
        let min = self.ns_per_op.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.ns_per_op.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // 样本标准差，单个样本时为0
        let stddev = if n > 1 {
            let var = self.ns_per_op.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        SampleSummary {
            cycles: n,
            mean_ns: mean,
            min_ns: min,
            max_ns: max,
            stddev_ns: stddev,
        }
    }

    fn reset(&mut self) {
        self.ns_per_op.clear();
    }
}

/// 预热阶段使用，丢弃所有样本
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSampleRecorder;

impl SampleRecorder for DisabledSampleRecorder {
    fn record(&mut self, _sample: CycleSample) {}
    fn snapshot(&self) -> SampleSummary { SampleSummary::default() }
    fn reset(&mut self) {}
}
