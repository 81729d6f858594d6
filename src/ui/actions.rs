//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 改变数值
    Increment,
    Decrement,
    Reset,

    // 历史导航
    Undo,
    Redo,

    // 视图
    ToggleHistory,
    ToggleHelp,
    Cancel, // Esc (帮助界面)
}
