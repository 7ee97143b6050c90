//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑，将用户意图转发给购物清单

use super::actions::Action;
use super::state::{App, AppMode, Draft, InputField, Notice};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAddItem => self.start_add_item(),
            Action::StartEditItem => self.start_edit_item(),
            Action::StartDeleteItem => self.start_delete_item(),

            Action::Cancel => self.cancel(),

            Action::Submit => match self.mode {
                AppMode::Adding => self.confirm_add_item(),
                AppMode::Editing(id) => self.confirm_edit_item(id),
                AppMode::ConfirmDelete(id) => {
                    self.delete_item(id);
                    self.mode = AppMode::Normal;
                }
                AppMode::Normal => {}
            },

            Action::SwitchField => {
                if matches!(self.mode, AppMode::Adding | AppMode::Editing(_)) {
                    self.input_field = self.input_field.toggle();
                }
            }

            Action::Input(c) => {
                let field = self.input_field;
                if let Some(draft) = self.active_draft_mut() {
                    draft.field_mut(field).push(c);
                }
            }

            Action::DeleteChar => {
                let field = self.input_field;
                if let Some(draft) = self.active_draft_mut() {
                    draft.field_mut(field).pop();
                }
            }

            Action::DismissNotice => self.notice = None,
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.list.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加条目相关 ============

    /// 打开添加对话框（保留上次取消时的草稿）
    pub fn start_add_item(&mut self) {
        self.mode = AppMode::Adding;
        self.input_field = InputField::Name;
        self.message = None;
    }

    /// 确认添加条目
    pub fn confirm_add_item(&mut self) {
        match self.list.add(&self.add_draft.name, &self.add_draft.quantity) {
            Ok(Some(_)) => {
                self.add_draft.clear();
                self.selected_index = self.list.len() - 1;
                self.mode = AppMode::Normal;
                self.message = Some("Item added".to_string());
            }
            // 名称或数量为空白：保持对话框，不提示
            Ok(None) => {}
            Err(err) => {
                tracing::info!(%err, "add rejected");
                self.notice = Some(Notice::INVALID_INPUT);
            }
        }
    }

    // ============ 编辑条目相关 ============

    /// 开始编辑选中的条目
    pub fn start_edit_item(&mut self) {
        if let Some(item) = self.selected_item() {
            let id = item.id;
            let draft = Draft::from_item(item);
            self.edit_draft = draft;
            self.input_field = InputField::Name;
            self.mode = AppMode::Editing(id);
            self.message = None;
        }
    }

    /// 确认编辑条目
    pub fn confirm_edit_item(&mut self, id: u64) {
        match self
            .list
            .edit(id, &self.edit_draft.name, &self.edit_draft.quantity)
        {
            Ok(found) => {
                self.mode = AppMode::Normal;
                self.edit_draft.clear();
                if found {
                    self.message = Some("Item updated".to_string());
                }
            }
            Err(err) => {
                tracing::info!(id, %err, "edit rejected");
                self.notice = Some(Notice::INVALID_QUANTITY);
            }
        }
    }

    // ============ 删除条目相关 ============

    /// 删除选中的条目（按配置决定是否先确认）
    pub fn start_delete_item(&mut self) {
        if let Some(id) = self.selected_item_id() {
            if self.confirm_delete {
                self.mode = AppMode::ConfirmDelete(id);
            } else {
                self.delete_item(id);
            }
        }
    }

    /// 执行删除
    pub fn delete_item(&mut self, id: u64) {
        if let Some(item) = self.list.delete(id) {
            self.message = Some(format!("Deleted {}", item.name));
        }
        self.clamp_selection();
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        if matches!(self.mode, AppMode::Editing(_)) {
            self.edit_draft.clear();
        }
        self.mode = AppMode::Normal;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ShoppingItem, ShoppingList};

    fn new_app() -> App {
        App::new(ShoppingList::new(), &Config::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn add(app: &mut App, name: &str, quantity: &str) {
        app.dispatch(Action::StartAddItem);
        type_text(app, name);
        app.dispatch(Action::SwitchField);
        type_text(app, quantity);
        app.dispatch(Action::Submit);
    }

    #[test]
    fn test_add_through_dialog() {
        let mut app = new_app();
        add(&mut app, "Bread", "2");

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.list.items(), &[ShoppingItem::new(1, "Bread".into(), 2)]);
        assert_eq!(app.add_draft, Draft::default());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_add_invalid_shows_notice() {
        let mut app = new_app();
        add(&mut app, "Milk", "abc");

        assert_eq!(app.notice, Some(Notice::INVALID_INPUT));
        assert_eq!(app.mode, AppMode::Adding);
        assert!(app.list.is_empty());

        app.dispatch(Action::DismissNotice);
        assert_eq!(app.notice, None);
        assert_eq!(app.add_draft.quantity, "abc");
    }

    #[test]
    fn test_add_blank_keeps_dialog_open() {
        let mut app = new_app();
        add(&mut app, "", "3");

        assert_eq!(app.mode, AppMode::Adding);
        assert_eq!(app.notice, None);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_cancel_keeps_add_draft() {
        let mut app = new_app();
        app.dispatch(Action::StartAddItem);
        type_text(&mut app, "Eggz");
        app.dispatch(Action::DeleteChar);
        app.dispatch(Action::Cancel);

        assert_eq!(app.mode, AppMode::Normal);
        app.dispatch(Action::StartAddItem);
        assert_eq!(app.add_draft.name, "Egg");
        assert_eq!(app.input_field, InputField::Name);
    }

    #[test]
    fn test_edit_through_dialog() {
        let mut app = new_app();
        add(&mut app, "Bread", "2");
        add(&mut app, "Eggs", "12");
        app.dispatch(Action::MoveSelectionUp);

        app.dispatch(Action::StartEditItem);
        assert_eq!(app.mode, AppMode::Editing(1));
        assert_eq!(app.edit_draft.quantity, "2");

        app.dispatch(Action::SwitchField);
        app.dispatch(Action::DeleteChar);
        type_text(&mut app, "3");
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.list.get(1), Some(&ShoppingItem::new(1, "Bread".into(), 3)));
        assert_eq!(app.list.get(2), Some(&ShoppingItem::new(2, "Eggs".into(), 12)));
    }

    #[test]
    fn test_edit_invalid_stays_in_edit_mode() {
        let mut app = new_app();
        add(&mut app, "Bread", "2");

        app.dispatch(Action::StartEditItem);
        app.dispatch(Action::SwitchField);
        type_text(&mut app, "x");
        app.dispatch(Action::Submit);

        assert_eq!(app.notice, Some(Notice::INVALID_QUANTITY));
        assert_eq!(app.mode, AppMode::Editing(1));
        assert_eq!(app.list.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_delete_immediately_and_clamp() {
        let mut app = new_app();
        add(&mut app, "Bread", "2");
        add(&mut app, "Eggs", "12");
        assert_eq!(app.selected_index, 1);

        app.dispatch(Action::StartDeleteItem);
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_delete_with_confirmation() {
        let config = Config {
            confirm_delete: true,
            ..Config::default()
        };
        let mut app = App::new(ShoppingList::new(), &config);
        add(&mut app, "Bread", "2");

        app.dispatch(Action::StartDeleteItem);
        assert_eq!(app.mode, AppMode::ConfirmDelete(1));
        app.dispatch(Action::Cancel);
        assert_eq!(app.list.len(), 1);

        app.dispatch(Action::StartDeleteItem);
        app.dispatch(Action::Submit);
        assert!(app.list.is_empty());
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_edit_and_delete_on_empty_list() {
        let mut app = new_app();
        app.dispatch(Action::StartEditItem);
        assert_eq!(app.mode, AppMode::Normal);
        app.dispatch(Action::StartDeleteItem);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_scenario() {
        let mut app = new_app();
        add(&mut app, "Bread", "2");
        add(&mut app, "Eggs", "12");

        app.selected_index = 0;
        app.dispatch(Action::StartEditItem);
        app.dispatch(Action::SwitchField);
        app.dispatch(Action::DeleteChar);
        type_text(&mut app, "3");
        app.dispatch(Action::Submit);

        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::StartDeleteItem);

        assert_eq!(app.list.items(), &[ShoppingItem::new(1, "Bread".into(), 3)]);
        assert!(!app.dispatch(Action::DismissNotice));
        assert!(app.dispatch(Action::Quit));
    }
}
