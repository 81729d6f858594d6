//! 计数器错误类型

use thiserror::Error;

/// 历史操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    Undo,
    Redo,
}

impl std::fmt::Display for HistoryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryOp::Undo => write!(f, "undo"),
            HistoryOp::Redo => write!(f, "redo"),
        }
    }
}

/// 步进方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOp {
    Increment,
    Decrement,
}

impl std::fmt::Display for StepOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOp::Increment => write!(f, "increment"),
            StepOp::Decrement => write!(f, "decrement"),
        }
    }
}

/// 计数器错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// undo/redo 在前置条件不满足时被调用（UI 层的 bug）
    #[error("{op} called outside its precondition (cursor {cursor}, history length {len})")]
    PreconditionViolation {
        op: HistoryOp,
        cursor: usize,
        len: usize,
    },

    /// 步进会超出 i64 范围
    #[error("{op} would overflow from {value}")]
    Overflow { op: StepOp, value: i64 },
}

pub type CounterResult<T> = Result<T, CounterError>;
