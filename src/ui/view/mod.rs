//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::actions::Action;
use super::state::{App, AppMode, ButtonArea};
use components::{render_button, render_dialog_framework};
use layouts::centered_rect;

const BUTTON_WIDTH: u16 = 10;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(3), // 标题
        Constraint::Min(3),    // 数值
        Constraint::Length(3), // 按钮
    ];
    if app.show_history {
        constraints.push(Constraint::Length(3)); // 历史
    }
    constraints.push(Constraint::Length(4)); // 帮助 + 状态

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_value(frame, app, chunks[1]);
    render_buttons(frame, app, chunks[2]);
    if app.show_history {
        render_history(frame, app, chunks[3]);
    }
    render_help(frame, app, chunks[chunks.len() - 1]);

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🔢 Simple Counter")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_value(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if app.counter.is_browsing() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let value = Paragraph::new(app.counter.current_value().to_string())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(value, centered_rect(inner.width, 1, inner));
}

/// 渲染按钮行，并记录每个按钮的位置供鼠标点击使用
fn render_buttons(frame: &mut Frame, app: &mut App, area: Rect) {
    let buttons = [
        ("-", Action::Decrement, true),
        ("+", Action::Increment, true),
        ("0", Action::Reset, true),
        ("Undo", Action::Undo, app.counter.can_undo()),
        ("Redo", Action::Redo, app.counter.can_redo()),
    ];

    let areas = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 5])
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    app.buttons.clear();
    for ((label, action, enabled), rect) in buttons.into_iter().zip(areas.iter()) {
        render_button(frame, *rect, label, enabled);
        app.buttons.push(ButtonArea {
            area: *rect,
            action,
            enabled,
        });
    }
}

/// 计算历史条可显示的范围 `[start, end)`，总是包含游标
///
/// 从游标向两侧扩展，按每项实际宽度累加直到占满 `width`。
fn history_window(history: &[i64], cursor: usize, width: usize) -> (usize, usize) {
    let item_width = |i: usize| history_span(history[i], Style::default()).width() + 1;

    // 两侧省略号最多占 3 列
    let budget = width.saturating_sub(3);
    let (mut start, mut end) = (cursor, cursor + 1);
    let mut used = item_width(cursor);

    loop {
        let mut grew = false;
        if end < history.len() && used + item_width(end) <= budget {
            used += item_width(end);
            end += 1;
            grew = true;
        }
        if start > 0 && used + item_width(start - 1) <= budget {
            start -= 1;
            used += item_width(start);
            grew = true;
        }
        if !grew {
            break;
        }
    }
    (start, end)
}

fn history_span(value: i64, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", value), style)
}

/// 渲染历史条，游标所在项高亮，可重做的部分显示为灰色
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let history = app.counter.history();
    let cursor = app.counter.cursor();
    let (start, end) = history_window(history, cursor, area.width.saturating_sub(2) as usize);

    let mut spans = Vec::new();
    if start > 0 {
        spans.push(Span::styled("… ", Style::default().fg(Color::DarkGray)));
    }
    for (i, value) in history.iter().enumerate().take(end).skip(start) {
        let style = if i == cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if i > cursor {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        spans.push(history_span(*value, style));
        spans.push(Span::raw(" "));
    }
    if end < history.len() {
        spans.push(Span::styled("…", Style::default().fg(Color::DarkGray)));
    }

    let title = format!("历史 ({}/{})", cursor + 1, history.len());
    let strip = Paragraph::new(Line::from(spans))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(strip, area);
}

/// 帮助栏：第一行按键说明，第二行状态消息
fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Normal => "[+/-] 加减  [0] 归零  [u] 撤销  [r] 重做  [h] 历史  [?] 帮助  [q] 退出",
        AppMode::Help => "[?/Esc] 关闭帮助",
    };

    let mut lines = vec![Line::styled(help_text, Style::default().fg(Color::Gray))];
    if let Some(message) = app.message.as_deref() {
        lines.push(Line::styled(
            message,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(44, 12, frame.area());
    let inner = render_dialog_framework(frame, area, "帮助");

    let text = "\
+ = k ↑    加一
- j ↓      减一
0          归零
u          撤销
r          重做
h          显示/隐藏历史
q Esc      退出

也可以用鼠标点击按钮";

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    frame.render_widget(help, inner);
}
