//! UI rendering

mod help_view;
mod sheet_view;

use crate::app::{App, Field, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("F1", "Help"), ("Esc", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Sheet => {
            let mut keys = vec![("↑/↓", "Field")];
            match app.focused() {
                field if field.is_dropdown() => keys.push(("←/→", "Choose")),
                Field::CurrentHp | Field::MaxHp | Field::Experience => keys.push(("Enter", "Update")),
                _ => {}
            }
            keys
        }
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    if let Some(status) = &app.status {
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" D&D 5e Character Sheet "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Text-mode progress bar; `value` is expected to lie in `0..=max`
pub fn progress_bar(value: i32, max: i32, width: u16, filled_color: Color) -> Line<'static> {
    let filled = bar_cells(value, max, width);
    let empty = width as usize - filled;

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(filled_color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

fn bar_cells(value: i32, max: i32, width: u16) -> usize {
    let percent = if max > 0 {
        (value as f64 / max as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (percent * width as f64) as usize
}

/// An editable value, bracketed and with a cursor when focused
pub fn field_span(text: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            format!("[{}▏]", text),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )
    } else {
        Span::styled(format!("[{}]", text), Style::default().fg(Color::White))
    }
}
