//! 计时器 - 单调时钟读取与耗时计算

use std::time::{Duration, Instant};

use crate::error::BenchError;

/// 时钟特征
pub trait Clock {
    /// 自某个固定起点以来的时间
    fn now(&self) -> Result<Duration, BenchError>;
}

/// 基于 [`Instant`] 的单调时钟
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// 创建时钟并确认其可用
    pub fn new() -> Result<Self, BenchError> {
        let clock = Self { origin: Instant::now() };
        let first = clock.now()?;
        let second = clock.now()?;
        elapsed_between(first, second)?;
        Ok(clock)
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Result<Duration, BenchError> {
        Ok(self.origin.elapsed())
    }
}

/// 计算 `start` 到 `end` 的耗时，时钟倒退时报错
#[inline]
pub fn elapsed_between(start: Duration, end: Duration) -> Result<Duration, BenchError> {
    end.checked_sub(start).ok_or_else(|| BenchError::Timer {
        reason: format!("时钟倒退: 起点 {:?}, 终点 {:?}", start, end),
    })
}
