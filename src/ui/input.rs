//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将按键和点击事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
                Some(Action::Increment)
            }
            KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => Some(Action::Decrement),
            KeyCode::Char('0') => Some(Action::Reset),
            KeyCode::Char('u') => Some(Action::Undo),
            KeyCode::Char('r') => Some(Action::Redo),
            KeyCode::Char('h') => Some(Action::ToggleHistory),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件，只响应正常模式下左键点击按钮
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if app.mode != AppMode::Normal {
        return Ok(false);
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(action) = app.button_at(mouse.column, mouse.row) {
            return Ok(app.dispatch(action));
        }
    }
    Ok(false)
}
