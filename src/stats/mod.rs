//! 统计模块 - 测量样本与桶分布

pub mod recorder;
pub mod distribution;

pub use recorder::{CycleSample, CycleStats, DisabledSampleRecorder, SampleRecorder, SampleSummary};
pub use distribution::BucketHistogram;
