//! Help tab view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::XP_THRESHOLDS;

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("↑/↓  Tab/Shift+Tab", "Move between fields"),
        key_line("←/→", "Choose class or background"),
        key_line("Backspace", "Delete last character"),
        key_line("Enter", "Update HP / XP (next field elsewhere)"),
        key_line("F1", "Toggle help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Rules ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Ability Modifier:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Modifier = floor((Score - 10) / 2)"),
        Line::from("  Recomputed as you type; blank if the score is not a number"),
        Line::from(""),
        Line::from(Span::styled(
            "Skill Bonus:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Equal to the modifier of the ability in brackets"),
        Line::from(""),
        Line::from(Span::styled(
            "Hit Points:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Max below 1 becomes 1, then current is kept within 0..=Max"),
        Line::from(""),
        Line::from(Span::styled(
            "Experience:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Negative XP becomes 0"),
        Line::from("  Bar fills toward the next level's threshold"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Rules "));
    f.render_widget(paragraph, chunks[0]);

    let mut table = vec![Line::from(Span::styled(
        "Level   Min XP",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    for (i, threshold) in XP_THRESHOLDS.iter().enumerate() {
        table.push(Line::from(vec![
            Span::styled(format!("  {:>2}  ", i + 1), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:>8}", threshold), Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(table)
        .block(Block::default().borders(Borders::ALL).title(" XP Table "));
    f.render_widget(paragraph, chunks[1]);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
