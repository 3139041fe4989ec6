//! 基准测试运行器 - 预热、测量与参数扫描
//!
//! 每个 (策略, 位数) 组合依次执行：先跑若干轮预热并丢弃结果，
//! 再跑若干轮测量。每轮重复调用直到达到最短持续时间，
//! 每次调用对键 `0..operations` 各计算一次桶索引并交给黑洞。

use crate::{
    bench::{
        clock::{elapsed_between, Clock, MonotonicClock},
        config::BenchConfig,
        report::{BenchReport, MeasurementResult},
        sink::{Blackhole, ResultSink},
    },
    error::BenchError,
    hash::{dispatch, BucketHasher, HasherVisitor},
    stats::{CycleSample, CycleStats, DisabledSampleRecorder, SampleRecorder},
    types::{Bits, HashKind},
    log_debug, log_error, log_info, log_warn,
};

/// 执行一次调用：对 `0..operations` 的每个键计算桶索引
#[inline(never)]
pub fn run_invocation<H, S>(hasher: H, size: i32, bits: i32, operations: i32, sink: &mut S)
where
    H: BucketHasher,
    S: ResultSink,
{
    for x in 0..operations {
        sink.consume(hasher.bucket(x, size, bits));
    }
}

/// 阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Warmup,
    Measurement,
}

impl Phase {
    fn as_str(&self) -> &'static str {
        match self {
            Phase::Warmup => "Warmup Iteration",
            Phase::Measurement => "Iteration",
        }
    }
}

/// 基准测试运行器
pub struct BenchmarkRunner<C: Clock = MonotonicClock> {
    config: BenchConfig,
    clock: C,
}

impl BenchmarkRunner<MonotonicClock> {
    /// 使用系统单调时钟创建运行器
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        Self::with_clock(config, MonotonicClock::new()?)
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// 使用指定时钟创建运行器
    pub fn with_clock(config: BenchConfig, clock: C) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// 执行完整扫描
    ///
    /// 位数越界只跳过对应组合；计时器错误中止整个运行。
    pub fn run(&self) -> Result<BenchReport, BenchError> {
        let mut report = BenchReport::new();
        log_info!(
            "开始扫描: {} 个组合, 预热 {} 轮, 测量 {} 轮, 每轮至少 {:?}",
            self.config.combinations(),
            self.config.warmup_iterations,
            self.config.measurement_iterations,
            self.config.iteration_time
        );

        for &kind in &self.config.kinds {
            for &bits in &self.config.bits {
                match self.measure(kind, bits) {
                    Ok(result) => {
                        log_info!("{} bits={}: {:.3} ns/op", kind, bits, result.ns_per_op());
                        report.add(result);
                    }
                    Err(e) if !e.is_fatal() => {
                        log_warn!("跳过 {} bits={}: {}", kind, bits, e);
                        report.add_failure(kind, bits, e.to_string());
                    }
                    Err(e) => {
                        log_error!("{} bits={} 中止运行: {}", kind, bits, e);
                        return Err(e);
                    }
                }
            }
        }

        Ok(report)
    }

    /// 测量单个组合
    pub fn measure(&self, kind: HashKind, bits: i32) -> Result<MeasurementResult, BenchError> {
        let bits = Bits::new(bits)?;
        dispatch(kind, Measure { runner: self, bits })
    }

    fn measure_with<H: BucketHasher>(&self, hasher: H, bits: Bits) -> Result<MeasurementResult, BenchError> {
        let size = bits.table_size();
        if !size.is_power_of_two() {
            return Err(BenchError::InvalidConfig {
                reason: format!("表大小 {} 不是2的幂", size.get()),
            });
        }

        let mut discarded = DisabledSampleRecorder;
        self.run_phase(hasher, bits, Phase::Warmup, self.config.warmup_iterations, &mut discarded)?;

        let mut stats = CycleStats::with_capacity(self.config.measurement_iterations);
        self.run_phase(hasher, bits, Phase::Measurement, self.config.measurement_iterations, &mut stats)?;

        Ok(MeasurementResult {
            kind: hasher.kind(),
            bits,
            summary: stats.snapshot(),
        })
    }

    fn run_phase<H, R>(
        &self,
        hasher: H,
        bits: Bits,
        phase: Phase,
        iterations: usize,
        recorder: &mut R,
    ) -> Result<(), BenchError>
    where
        H: BucketHasher,
        R: SampleRecorder,
    {
        for i in 0..iterations {
            let sample = self.run_cycle(hasher, bits)?;
            log_debug!(
                "{} bits={} # {} {}: {:.3} ns/op ({} 次调用)",
                hasher.kind(),
                bits,
                phase.as_str(),
                i + 1,
                sample.ns_per_op(),
                sample.invocations
            );
            recorder.record(sample);
        }
        Ok(())
    }

    /// 执行一轮：重复调用直到达到最短持续时间，至少一次
    fn run_cycle<H: BucketHasher>(&self, hasher: H, bits: Bits) -> Result<CycleSample, BenchError> {
        let size = bits.table_size().get();
        // validate() 已保证不超过 i32::MAX
        let operations = self.config.operations as i32;
        let mut sink = Blackhole;
        let mut invocations = 0u64;

        let start = self.clock.now()?;
        loop {
            run_invocation(hasher, size, bits.get(), operations, &mut sink);
            invocations += 1;

            let elapsed = elapsed_between(start, self.clock.now()?)?;
            if elapsed >= self.config.iteration_time {
                return Ok(CycleSample {
                    elapsed,
                    invocations,
                    operations: self.config.operations as u64,
                });
            }
        }
    }
}

struct Measure<'a, C: Clock> {
    runner: &'a BenchmarkRunner<C>,
    bits: Bits,
}

impl<C: Clock> HasherVisitor for Measure<'_, C> {
    type Output = Result<MeasurementResult, BenchError>;

    fn visit<H: BucketHasher>(self, hasher: H) -> Self::Output {
        self.runner.measure_with(hasher, self.bits)
    }
}
