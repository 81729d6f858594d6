use crate::error::{CounterError, CounterResult, HistoryOp, StepOp};

/// 带撤销/重做历史的计数器
///
/// `history[cursor]` 始终是当前显示的值。`browsing` 为 false 时游标固定在最新一项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCounter {
    history: Vec<i64>,
    cursor: usize,
    browsing: bool,
}

impl Default for HistoryCounter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HistoryCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            history: vec![initial],
            cursor: 0,
            browsing: false,
        }
    }

    /// 提交一个新值
    ///
    /// 在浏览历史时，游标之后的所有记录（重做分支）会被丢弃。
    pub fn apply(&mut self, value: i64) -> i64 {
        if self.browsing {
            self.history.truncate(self.cursor + 1);
            self.browsing = false;
        }
        self.history.push(value);
        self.cursor = self.history.len() - 1;
        value
    }

    /// 当前值加一，溢出时返回错误且不改变状态
    pub fn increment(&mut self) -> CounterResult<i64> {
        let current = self.current_value();
        let next = current.checked_add(1).ok_or(CounterError::Overflow {
            op: StepOp::Increment,
            value: current,
        })?;
        Ok(self.apply(next))
    }

    /// 当前值减一，溢出时返回错误且不改变状态
    pub fn decrement(&mut self) -> CounterResult<i64> {
        let current = self.current_value();
        let next = current.checked_sub(1).ok_or(CounterError::Overflow {
            op: StepOp::Decrement,
            value: current,
        })?;
        Ok(self.apply(next))
    }

    pub fn reset(&mut self) -> i64 {
        self.apply(0)
    }

    /// 游标后退一步
    pub fn undo(&mut self) -> CounterResult<i64> {
        if !self.can_undo() {
            return Err(self.violation(HistoryOp::Undo));
        }
        self.browsing = true;
        self.cursor -= 1;
        Ok(self.current_value())
    }

    /// 游标前进一步
    ///
    /// 到达最新一项时 `browsing` 仍保持为 true，只有 `apply` 才会清除它。
    pub fn redo(&mut self) -> CounterResult<i64> {
        if self.cursor + 1 >= self.history.len() {
            return Err(self.violation(HistoryOp::Redo));
        }
        self.cursor += 1;
        Ok(self.current_value())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.browsing && self.cursor + 1 < self.history.len()
    }

    pub fn current_value(&self) -> i64 {
        self.history[self.cursor]
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.browsing
    }

    fn violation(&self, op: HistoryOp) -> CounterError {
        CounterError::PreconditionViolation {
            op,
            cursor: self.cursor,
            len: self.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 场景 1：0 -> 1 -> 2
    fn scenario_one() -> HistoryCounter {
        let mut counter = HistoryCounter::default();
        assert_eq!(counter.apply(1), 1);
        assert_eq!(counter.apply(2), 2);
        counter
    }

    #[test]
    fn test_initial_state() {
        let counter = HistoryCounter::default();
        assert_eq!(counter.current_value(), 0);
        assert_eq!(counter.history(), &[0]);
        assert!(!counter.can_undo());
        assert!(!counter.can_redo());
        assert!(!counter.is_browsing());
    }

    #[test]
    fn test_custom_seed() {
        let counter = HistoryCounter::new(-7);
        assert_eq!(counter.current_value(), -7);
        assert_eq!(counter.history(), &[-7]);
    }

    #[test]
    fn test_apply_sequence() {
        let mut counter = HistoryCounter::default();
        for value in [3, -1, 8, 8, 0, 42] {
            assert_eq!(counter.apply(value), value);
            assert_eq!(counter.current_value(), value);
            assert!(counter.can_undo());
            assert!(!counter.can_redo());
            assert_eq!(counter.cursor(), counter.history().len() - 1);
        }
        assert_eq!(counter.history(), &[0, 3, -1, 8, 8, 0, 42]);
    }

    #[test]
    fn test_scenario_one() {
        let counter = scenario_one();
        assert_eq!(counter.current_value(), 2);
        assert!(counter.can_undo());
        assert!(!counter.can_redo());
    }

    #[test]
    fn test_scenario_two() {
        let mut counter = scenario_one();
        assert_eq!(counter.undo(), Ok(1));
        assert_eq!(counter.undo(), Ok(0));
        assert!(!counter.can_undo());
        assert!(counter.can_redo());
    }

    #[test]
    fn test_scenario_three_branching() {
        let mut counter = scenario_one();
        counter.undo().unwrap();
        counter.undo().unwrap();

        assert_eq!(counter.redo(), Ok(1));
        assert_eq!(counter.apply(5), 5);
        assert!(!counter.can_redo());
        assert_eq!(counter.history(), &[0, 1, 5]);
        // 分支 2 已被丢弃
        assert_eq!(counter.undo(), Ok(1));
    }

    #[test]
    fn test_scenario_four_reset() {
        let mut counter = HistoryCounter::default();
        counter.apply(5);
        assert_eq!(counter.reset(), 0);
        assert_eq!(counter.current_value(), 0);
        assert_eq!(counter.undo(), Ok(5));
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut counter = HistoryCounter::default();
        for value in 1..=5 {
            counter.apply(value * 10);
        }
        for _ in 0..5 {
            let before = counter.current_value();
            counter.undo().unwrap();
            assert_eq!(counter.redo(), Ok(before));
            counter.undo().unwrap();
        }
        assert_eq!(counter.current_value(), 0);
    }

    #[test]
    fn test_redo_to_tail_keeps_browsing() {
        let mut counter = scenario_one();
        counter.undo().unwrap();
        counter.redo().unwrap();
        assert!(counter.is_browsing());
        assert!(!counter.can_redo());
        assert_eq!(counter.cursor(), 2);

        // 截断到末尾是空操作
        counter.apply(3);
        assert!(!counter.is_browsing());
        assert_eq!(counter.history(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_branch_after_multiple_undos() {
        let mut counter = HistoryCounter::default();
        for value in [1, 2, 3, 4] {
            counter.apply(value);
        }
        counter.undo().unwrap();
        counter.undo().unwrap();
        counter.undo().unwrap();
        counter.apply(9);

        assert!(!counter.can_redo());
        assert_eq!(counter.history(), &[0, 1, 9]);
        assert!(counter.history().iter().all(|v| ![2, 3, 4].contains(v)));
    }

    #[test]
    fn test_undo_precondition() {
        let mut counter = HistoryCounter::default();
        let err = counter.undo().unwrap_err();
        assert_eq!(
            err,
            CounterError::PreconditionViolation {
                op: HistoryOp::Undo,
                cursor: 0,
                len: 1,
            }
        );
        assert_eq!(counter, HistoryCounter::default());
    }

    #[test]
    fn test_redo_precondition() {
        let mut counter = scenario_one();
        let err = counter.redo().unwrap_err();
        assert!(matches!(
            err,
            CounterError::PreconditionViolation {
                op: HistoryOp::Redo,
                cursor: 2,
                len: 3,
            }
        ));
        assert_eq!(counter.current_value(), 2);
    }

    #[test]
    fn test_increment_decrement() {
        let mut counter = HistoryCounter::default();
        assert_eq!(counter.increment(), Ok(1));
        assert_eq!(counter.increment(), Ok(2));
        assert_eq!(counter.decrement(), Ok(1));
        assert_eq!(counter.history(), &[0, 1, 2, 1]);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut counter = HistoryCounter::new(i64::MAX);
        assert_eq!(
            counter.increment(),
            Err(CounterError::Overflow {
                op: StepOp::Increment,
                value: i64::MAX,
            })
        );
        assert_eq!(counter.history(), &[i64::MAX]);

        let mut counter = HistoryCounter::new(i64::MIN);
        assert!(matches!(
            counter.decrement(),
            Err(CounterError::Overflow {
                op: StepOp::Decrement,
                ..
            })
        ));
        assert_eq!(counter.current_value(), i64::MIN);
    }

    #[test]
    fn test_error_message() {
        let err = CounterError::PreconditionViolation {
            op: HistoryOp::Undo,
            cursor: 0,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "undo called outside its precondition (cursor 0, history length 1)"
        );

        let err = CounterError::Overflow {
            op: StepOp::Decrement,
            value: i64::MIN,
        };
        assert_eq!(
            err.to_string(),
            format!("decrement would overflow from {}", i64::MIN)
        );
    }
}
