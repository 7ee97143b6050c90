//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::config::Config;
use crate::models::{ShoppingItem, ShoppingList};

/// 应用状态
pub struct App {
    pub list: ShoppingList,
    pub selected_index: usize,
    pub mode: AppMode,
    pub input_field: InputField,
    pub add_draft: Draft,  // 取消后保留，下次打开继续显示
    pub edit_draft: Draft, // 进入编辑时用条目当前值填充
    pub notice: Option<Notice>,
    pub message: Option<String>,
    pub title: String,
    pub confirm_delete: bool,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Adding,
    Editing(u64),       // 正在编辑的条目 ID
    ConfirmDelete(u64), // 待删除的条目 ID
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputField {
    Name,
    Quantity,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            InputField::Name => InputField::Quantity,
            InputField::Quantity => InputField::Name,
        }
    }
}

/// 对话框中的两栏文本
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Name => &mut self.name,
            InputField::Quantity => &mut self.quantity,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
    }
}

/// 可关闭的校验提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// 添加时数量非法
    pub const INVALID_INPUT: Notice = Notice {
        title: "Invalid Input",
        message: "Please enter a valid quantity.",
    };

    /// 编辑时数量非法
    pub const INVALID_QUANTITY: Notice = Notice {
        title: "Invalid Quantity",
        message: "Please enter a valid numeric quantity.",
    };
}

impl App {
    /// 创建新的应用实例
    pub fn new(list: ShoppingList, config: &Config) -> Self {
        let mut app = Self {
            list,
            selected_index: 0,
            mode: AppMode::Normal,
            input_field: InputField::Name,
            add_draft: Draft::default(),
            edit_draft: Draft::default(),
            notice: None,
            message: None,
            title: config.title.clone(),
            confirm_delete: config.confirm_delete,
        };
        app.clamp_selection();
        app
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.list.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.list.items().get(self.selected_index)
    }

    /// 获取当前选中的条目 ID
    pub fn selected_item_id(&self) -> Option<u64> {
        self.selected_item().map(|item| item.id)
    }

    /// 当前模式下正在输入的文本
    pub fn active_draft_mut(&mut self) -> Option<&mut Draft> {
        match self.mode {
            AppMode::Adding => Some(&mut self.add_draft),
            AppMode::Editing(_) => Some(&mut self.edit_draft),
            _ => None,
        }
    }
}
