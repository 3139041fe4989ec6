//! 基准测试模块 - 配置、计时、黑洞、运行器与报告

pub mod config;
pub mod clock;
pub mod sink;
pub mod runner;
pub mod report;

pub use config::BenchConfig;
pub use clock::{elapsed_between, Clock, MonotonicClock};
pub use sink::{Blackhole, ResultSink};
pub use runner::{run_invocation, BenchmarkRunner};
pub use report::{BenchReport, MeasurementResult, SweepFailure};
