//! 基准测试报告 - 文本表格与 Prometheus 指标

use std::fmt;

use crate::{
    stats::SampleSummary,
    types::{Bits, HashKind},
};

/// 单个 (策略, 位数) 组合的测量结果
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    pub kind: HashKind,
    pub bits: Bits,
    pub summary: SampleSummary,
}

impl MeasurementResult {
    /// 平均单次哈希耗时 (纳秒)
    pub fn ns_per_op(&self) -> f64 {
        self.summary.mean_ns
    }
}

/// 被跳过的组合
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFailure {
    pub kind: HashKind,
    pub bits: i32,
    pub reason: String,
}

/// 累积测量结果并生成报告
#[derive(Debug, Default, Clone)]
pub struct BenchReport {
    rows: Vec<MeasurementResult>,
    failures: Vec<SweepFailure>,
}

impl BenchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: MeasurementResult) {
        self.rows.push(result);
    }

    pub fn add_failure(&mut self, kind: HashKind, bits: i32, reason: impl Into<String>) {
        self.failures.push(SweepFailure {
            kind,
            bits,
            reason: reason.into(),
        });
    }

    /// 成功的结果，按扫描顺序
    pub fn rows(&self) -> &[MeasurementResult] {
        &self.rows
    }

    pub fn failures(&self) -> &[SweepFailure] {
        &self.failures
    }

    /// 查找指定组合的结果
    pub fn find(&self, kind: HashKind, bits: i32) -> Option<&MeasurementResult> {
        self.rows.iter().find(|r| r.kind == kind && r.bits.get() == bits)
    }

    /// 生成文本表格
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<12} {:>6} {:>5} {:>4} {:>10} {:>10} {:>6}\n",
            "Benchmark", "(bits)", "Mode", "Cnt", "Score", "Error", "Units"
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "{:<12} {:>6} {:>5} {:>4} {:>10.3} ± {:>8.3} {:>6}\n",
                row.kind.as_str(),
                row.bits.get(),
                "avgt",
                row.summary.cycles,
                row.summary.mean_ns,
                row.summary.stddev_ns,
                "ns/op"
            ));
        }
        for failure in &self.failures {
            out.push_str(&format!(
                "{:<12} {:>6} 跳过: {}\n",
                failure.kind.as_str(),
                failure.bits,
                failure.reason
            ));
        }
        out
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();
        output.push_str("# HELP hash_bench_ns_per_op Average nanoseconds per hash invocation\n");
        output.push_str("# TYPE hash_bench_ns_per_op gauge\n");
        for row in &self.rows {
            output.push_str(&format!(
                "hash_bench_ns_per_op{{strategy=\"{}\",bits=\"{}\"}} {}\n",
                row.kind.as_str(),
                row.bits.get(),
                row.summary.mean_ns
            ));
        }

        output.push_str("# HELP hash_bench_skipped_total Combinations skipped due to errors\n");
        output.push_str("# TYPE hash_bench_skipped_total counter\n");
        output.push_str(&format!("hash_bench_skipped_total {}\n", self.failures.len()));
        output
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
