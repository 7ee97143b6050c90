//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddItem),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEditItem),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::StartDeleteItem),
            _ => None,
        },
        AppMode::Adding | AppMode::Editing(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(Action::SwitchField)
            }
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::ConfirmDelete(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 校验提示打开时只接受关闭操作
pub fn get_notice_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(Action::DismissNotice)
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    let action = if app.notice.is_some() {
        get_notice_action(key)
    } else {
        get_action(&app.mode, key)
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
