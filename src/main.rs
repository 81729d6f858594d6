mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::prelude::*;

use crate::config::{Config, config_path, load_config};
use crate::models::HistoryCounter;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 配置文件 (~/.config/simple-counter/config.toml)，不存在时使用默认值
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    // 日志不可用时继续运行
    let log_path = logging::init(&config.log_level);
    info!("starting with {:?}", config);

    // 创建应用状态
    let mut app = App::new(
        HistoryCounter::new(config.initial_value),
        config.show_history,
    );

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(
        "exiting at {} after {} history entries",
        app.counter.current_value(),
        app.counter.history().len()
    );
    if let Err(e) = &result {
        match &log_path {
            Some(path) => eprintln!("出错了: {}（日志: {}）", e, path.display()),
            None => eprintln!("出错了: {}", e),
        }
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key.code)?
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse)?,
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
