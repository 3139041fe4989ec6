//! 结果接收器 - 防止编译器消除哈希计算

/// 接收哈希结果，不做任何可观察的处理
pub trait ResultSink {
    fn consume(&mut self, value: i32);
}

/// 基于 [`std::hint::black_box`] 的黑洞
#[derive(Debug, Default, Clone, Copy)]
pub struct Blackhole;

impl ResultSink for Blackhole {
    #[inline(always)]
    fn consume(&mut self, value: i32) {
        std::hint::black_box(value);
    }
}

impl<F> ResultSink for F
where
    F: FnMut(i32),
{
    #[inline(always)]
    fn consume(&mut self, value: i32) {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |v: i32| seen.push(v);
            sink.consume(3);
            sink.consume(7);
        }
        assert_eq!(seen, [3, 7]);
    }

    #[test]
    fn test_blackhole_accepts_values() {
        let mut sink = Blackhole;
        for v in [0, -1, i32::MAX] {
            sink.consume(v);
        }
    }
}
