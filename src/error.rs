//! 统一错误处理 - 基准测试可能出现的错误类型

use crate::types::HashKind;

/// 基准测试可能发生的错误
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("无效的位数: {bits} (支持范围 1..=30)")]
    InvalidBits {
        bits: i32,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("计时器异常: {reason}")]
    Timer {
        reason: String,
    },

    #[error("桶索引越界 (策略: {kind}, 索引: {bucket}, 表大小: {size})")]
    BucketOutOfRange {
        kind: HashKind,
        bucket: i32,
        size: i32,
    },
}

impl BenchError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidBits { .. } => Some("将位数限制在 1..=30 之间"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::Timer { .. } => Some("检查系统时钟，计时结果不可信"),
            Self::BucketOutOfRange { .. } => Some("仅使用非负键"),
        }
    }

    /// 判断错误是否需要中止整个测试
    ///
    /// 位数错误只影响单个组合，其余错误都会让全部结果失去意义。
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidBits { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        assert!(!BenchError::InvalidBits { bits: 31 }.is_fatal());
        assert!(BenchError::Timer { reason: "backwards".into() }.is_fatal());
        assert!(BenchError::InvalidConfig { reason: "zero".into() }.is_fatal());
    }

    #[test]
    fn test_display() {
        let err = BenchError::InvalidBits { bits: 42 };
        assert!(err.to_string().contains("42"));

        let err = BenchError::BucketOutOfRange {
            kind: HashKind::Modulo,
            bucket: -3,
            size: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("moduloHash"));
        assert!(msg.contains("-3"));
        assert!(err.recovery_suggestion().is_some());
    }
}
