//! 桶哈希微基准测试库
//!
//! 比较三种把整数键映射到桶索引的策略在不同表大小下的单次调用耗时：
//! - 截断取模 `x % size`
//! - 高16位异或后掩码 `(x ^ (x >>> 16)) & (size - 1)`
//! - 斐波那契乘法哈希 `(x * 663608942) >>> (32 - bits)`
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use bucket_hash_bench::*;
//!
//! fn main() -> Result<(), BenchError> {
//!     // 默认配置：位数 2..=10，预热5轮，测量5轮，每轮至少1秒
//!     let runner = BenchmarkRunner::new(BenchConfig::default())?;
//!     let report = runner.run()?;
//!     print!("{}", report.summary());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod stats;
pub mod bench;

// 公共接口导出
pub use crate::{
    bench::{
        BenchConfig,
        BenchReport,
        BenchmarkRunner,
        Blackhole,
        Clock,
        MeasurementResult,
        MonotonicClock,
        ResultSink,
        SweepFailure,
        run_invocation,
    },
    hash::{
        BucketHasher,
        FibonacciHasher,
        JavaHasher,
        ModuloHasher,
        FIB_MULTIPLIER,
        fib_hash,
        java_hash,
        modulo_hash,
    },
    stats::{BucketHistogram, SampleSummary},
    error::BenchError,
    types::{Bits, HashKind, TableSize, OPERATION_COUNT, DEFAULT_BITS},
};

/// 使用默认配置执行完整扫描
pub fn run_default() -> Result<BenchReport, BenchError> {
    BenchmarkRunner::new(BenchConfig::default())?.run()
}
