use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 在 `area` 中居中放置一个按百分比缩放的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 水平按百分比、垂直按固定行数居中
pub fn centered_fixed(percent_x: u16, height: u16, area: Rect) -> Rect {
    let column = centered_rect(percent_x, 100, area);
    let height = height.min(column.height);
    Rect {
        y: column.y + (column.height - height) / 2,
        height,
        ..column
    }
}

/// 对话框内部：名称、数量两个输入框加一行提示
pub fn two_field_rows(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}
