//! 业务逻辑处理 (Update/Dispatch)
//!
//! 将 Action 转换为对 HistoryCounter 的调用

use log::{debug, error, warn};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::error::{CounterError, CounterResult, StepOp};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!("dispatch {:?}", action);
        match action {
            Action::Quit => return true,

            Action::Increment => {
                let result = self.counter.increment();
                self.finish_change(result);
            }
            Action::Decrement => {
                let result = self.counter.decrement();
                self.finish_change(result);
            }
            Action::Reset => {
                self.counter.reset();
                self.message = None;
            }

            Action::Undo => self.undo(),
            Action::Redo => self.redo(),

            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Normal => AppMode::Help,
                    AppMode::Help => AppMode::Normal,
                };
            }
            Action::Cancel => self.cancel(),
        }
        false
    }

    // ============ 数值修改 ============

    fn finish_change(&mut self, result: CounterResult<i64>) {
        match result {
            Ok(_) => self.message = None,
            Err(e) => {
                warn!("{}", e);
                let bound = match e {
                    CounterError::Overflow {
                        op: StepOp::Decrement,
                        ..
                    } => "下限",
                    _ => "上限",
                };
                self.message = Some(format!("数值已达到{}", bound));
            }
        }
    }

    // ============ 历史导航 ============

    /// 撤销，按钮不可用时忽略
    pub fn undo(&mut self) {
        if !self.counter.can_undo() {
            self.message = Some("没有可撤销的操作".to_string());
            return;
        }
        let result = self.counter.undo().map(|_| ());
        self.report(result);
    }

    /// 重做，按钮不可用时忽略
    pub fn redo(&mut self) {
        if !self.counter.can_redo() {
            self.message = Some("没有可重做的操作".to_string());
            return;
        }
        let result = self.counter.redo().map(|_| ());
        self.report(result);
    }

    fn report(&mut self, result: CounterResult<()>) {
        match result {
            Ok(()) => {
                self.message = Some(format!(
                    "历史 {}/{}",
                    self.counter.cursor() + 1,
                    self.counter.history().len()
                ));
            }
            Err(e) => {
                // 前置条件已在上面检查过
                error!("{}", e);
                self.message = Some(e.to_string());
            }
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
