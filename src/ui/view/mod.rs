//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode, Draft, InputField, Notice};
use components::{render_dialog_framework, render_input_widget};
use layouts::{centered_fixed, two_field_rows};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(5),    // 清单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_items(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    // 渲染弹窗
    match &app.mode {
        AppMode::Adding => render_item_dialog(
            frame,
            "ADD ITEM FOR SHOP",
            ["ADD ITEM NAME", "QUANTITY"],
            &app.add_draft,
            app.input_field,
            "[Enter] ADD  [Esc] CANCEL  [Tab] switch field",
        ),
        AppMode::Editing(_) => render_item_dialog(
            frame,
            "Edit Item",
            ["Edit Name", "Edit Quantity"],
            &app.edit_draft,
            app.input_field,
            "[Enter] OK  [Esc] cancel  [Tab] switch field",
        ),
        AppMode::ConfirmDelete(id) => render_confirm_dialog(frame, app, *id),
        AppMode::Normal => {}
    }

    // 校验提示覆盖在对话框之上
    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!("🛒 {}", app.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   [a] ENTER ITEM", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_items(frame: &mut Frame, app: &App, area: Rect) {
    let summary = format!(
        "Items: {}  Total: {}",
        app.list.len(),
        app.list.total_quantity()
    );
    let block = Block::default()
        .title("Shopping list")
        .title_bottom(Line::from(summary).right_aligned())
        .borders(Borders::ALL);

    if app.list.is_empty() {
        let empty = Paragraph::new("The list is empty, press 'a' to add an item")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", item.name), style),
                Span::styled(
                    format!("  Quantity: {}", item.quantity),
                    style.fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.notice.is_some() {
        "[Enter] OK"
    } else {
        match &app.mode {
            AppMode::Normal => "[a] add  [e] edit  [d] delete  [j/k] navigate  [q] quit",
            AppMode::Adding | AppMode::Editing(_) => {
                "[Enter] confirm  [Tab] switch field  [Esc] cancel"
            }
            AppMode::ConfirmDelete(_) => "[y] confirm  [n] cancel",
        }
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_item_dialog(
    frame: &mut Frame,
    title: &str,
    labels: [&str; 2],
    draft: &Draft,
    field: InputField,
    hint: &str,
) {
    let area = centered_fixed(60, 9, frame.area());
    let inner = render_dialog_framework(frame, area, title, Color::Cyan);
    let [name_area, quantity_area, hint_area] = two_field_rows(inner);

    render_input_widget(
        frame,
        name_area,
        labels[0],
        &draft.name,
        field == InputField::Name,
    );
    render_input_widget(
        frame,
        quantity_area,
        labels[1],
        &draft.quantity,
        field == InputField::Quantity,
    );

    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        hint_area,
    );
}

fn render_confirm_dialog(frame: &mut Frame, app: &App, id: u64) {
    let area = centered_fixed(50, 6, frame.area());
    frame.render_widget(Clear, area);

    let name = app.list.get(id).map(|item| item.name.as_str()).unwrap_or("");
    let dialog = Paragraph::new(format!("Delete \"{}\"?\n\n[y] confirm  [n] cancel", name))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("⚠️ Delete item").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = centered_fixed(60, 6, frame.area());
    let inner = render_dialog_framework(frame, area, notice.title, Color::Red);

    let body = Paragraph::new(format!("{}\n\n[Enter] OK", notice.message))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::ShoppingList;
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_items() {
        let mut list = ShoppingList::new();
        list.add("Bread", "2").unwrap();
        list.add("Eggs", "12").unwrap();
        let app = App::new(list, &Config::default());

        let text = screen(&app);
        assert!(text.contains("Bread"));
        assert!(text.contains("Quantity: 12"));
        assert!(text.contains("Items: 2  Total: 14"));
    }

    #[test]
    fn test_render_empty_list() {
        let app = App::new(ShoppingList::new(), &Config::default());
        let text = screen(&app);
        assert!(text.contains("The list is empty"));
    }

    #[test]
    fn test_render_add_dialog_with_notice() {
        let mut app = App::new(ShoppingList::new(), &Config::default());
        app.dispatch(Action::StartAddItem);
        assert!(screen(&app).contains("ADD ITEM FOR SHOP"));

        app.dispatch(Action::Input('M'));
        app.dispatch(Action::SwitchField);
        app.dispatch(Action::Input('x'));
        app.dispatch(Action::Submit);

        let text = screen(&app);
        assert!(text.contains("Invalid Input"));
        assert!(text.contains("Please enter a valid quantity."));
    }
}
