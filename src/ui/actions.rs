//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 触发特定功能
    StartAddItem,
    StartEditItem,
    StartDeleteItem,

    // 表单/通用交互
    Cancel,        // Esc / n
    Submit,        // Enter / y
    SwitchField,   // Tab / 上下键
    Input(char),   // 输入字符
    DeleteChar,    // Backspace
    DismissNotice, // 关闭校验提示
}
