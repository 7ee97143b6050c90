mod config;
mod error;
mod logging;
mod models;
mod terminal;
mod ui;

use std::env;
use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::config::{default_config_path, load_config};
use crate::error::AppError;
use crate::models::ShoppingList;
use crate::terminal::RestoreGuard;
use crate::ui::{App, render};

fn main() -> Result<(), AppError> {
    // 配置文件路径：命令行第一个参数，否则 ~/.config/basket/config.toml
    let config_path = match env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;

    let log_path = logging::init(&config.log_level)?;
    tracing::info!(config = %config_path.display(), "basket starting");

    // 清单只存在于内存中
    let mut app = App::new(ShoppingList::new(), &config);

    let result = run_in_terminal(&mut app);

    match &result {
        Ok(()) => tracing::info!(items = app.list.len(), "basket exiting"),
        Err(err) => {
            tracing::error!(%err, "terminal session failed");
            eprintln!("日志见 {}", log_path.display());
        }
    }

    result.map_err(AppError::from)
}

/// 接管终端运行主循环；返回前 guard 已恢复终端
fn run_in_terminal(app: &mut App) -> io::Result<()> {
    let _guard = RestoreGuard::new(terminal::restore);
    let mut terminal = terminal::setup()?;
    run_app(&mut terminal, app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
