//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::{Position, Rect};

use super::actions::Action;
use crate::models::HistoryCounter;

/// 应用状态
pub struct App {
    pub counter: HistoryCounter,
    pub mode: AppMode,
    pub show_history: bool,
    pub message: Option<String>,
    pub buttons: Vec<ButtonArea>, // 上一帧渲染出的可点击按钮
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

/// 屏幕上一个按钮的位置
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonArea {
    pub area: Rect,
    pub action: Action,
    pub enabled: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(counter: HistoryCounter, show_history: bool) -> Self {
        Self {
            counter,
            mode: AppMode::Normal,
            show_history,
            message: None,
            buttons: Vec::new(),
        }
    }

    /// 查找坐标处的可用按钮
    pub fn button_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|button| button.enabled && button.area.contains(position))
            .map(|button| button.action.clone())
    }
}
