//! Character sheet tab view

use crate::app::{App, Field};
use crate::ui::{field_span, progress_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::{Ability, Skill};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_identity(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    draw_abilities(f, app, columns[0]);
    draw_vitals(f, app, columns[1]);
    draw_skills(f, app, columns[2]);
}

fn draw_identity(f: &mut Frame, app: &App, area: Rect) {
    let sheet = &app.sheet;
    let line = Line::from(vec![
        Span::styled("Name: ", Style::default().fg(Color::Gray)),
        field_span(&sheet.name, app.is_focused(Field::Name)),
        Span::raw("   "),
        dropdown_span(sheet.class_label(), app.is_focused(Field::Class)),
        Span::raw("   "),
        dropdown_span(sheet.background_label(), app.is_focused(Field::Background)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn dropdown_span(label: &str, focused: bool) -> Span<'static> {
    let text = if focused {
        format!("◀ {} ▶", label)
    } else {
        format!("  {} ▾", label)
    };
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(text, style)
}

fn draw_abilities(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![section_header("═══ Ability Scores ═══"), Line::from("")];

    for ability in Ability::all() {
        let focused = app.is_focused(Field::Ability(*ability));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:14}", format!("{}:", ability.name())),
                Style::default().fg(Color::Gray),
            ),
            field_span(app.sheet.ability_text(*ability), focused),
            Span::raw(" "),
            modifier_span(app.sheet.modifier_label(*ability)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Abilities "));
    f.render_widget(paragraph, area);
}

fn draw_vitals(f: &mut Frame, app: &App, area: Rect) {
    let sheet = &app.sheet;
    let bar_width = area.width.saturating_sub(4);
    let hp = sheet.hit_points();
    let xp = sheet.experience();

    let lines = vec![
        section_header("═══ Hit Points ═══"),
        Line::from(vec![
            field_span(sheet.current_hp_text(), app.is_focused(Field::CurrentHp)),
            Span::styled(" / ", Style::default().fg(Color::Gray)),
            field_span(sheet.max_hp_text(), app.is_focused(Field::MaxHp)),
            Span::styled("   [Update: Enter]", Style::default().fg(Color::DarkGray)),
        ]),
        progress_bar(hp.current, hp.max, bar_width, Color::Red),
        Line::from(Span::styled(
            format!("{} HP ({:.0}%)", hp, hp.fraction() * 100.0),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section_header("═══ Experience ═══"),
        Line::from(vec![
            field_span(sheet.xp_text(), app.is_focused(Field::Experience)),
            Span::styled("   [Update: Enter]", Style::default().fg(Color::DarkGray)),
        ]),
        progress_bar(xp.bar_value, xp.bar_maximum, bar_width, Color::Green),
        Line::from(Span::styled(
            format!("{}/{} XP ({:.0}%)", xp.bar_value, xp.bar_maximum, xp.fraction() * 100.0),
            Style::default().fg(Color::DarkGray),
        )),
        level_line(&sheet.level_label(), xp.is_max_level()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Vitals "));
    f.render_widget(paragraph, area);
}

fn draw_skills(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![section_header("═══ Skills ═══")];

    for skill in Skill::all() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:22}", format!("{} ({})", skill.name(), skill.ability().abbreviation())),
                Style::default().fg(Color::Gray),
            ),
            modifier_span(app.sheet.skill_label(*skill)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Skills "));
    f.render_widget(paragraph, area);
}

fn level_line(label: &str, max_level: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        label.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if max_level {
        spans.push(Span::styled(" (max)", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn section_header(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn modifier_span(label: String) -> Span<'static> {
    let color = if label.starts_with('-') {
        Color::Red
    } else if label == "+0" || label.is_empty() {
        Color::White
    } else {
        Color::Green
    };
    Span::styled(format!("{:>4}", label), Style::default().fg(color))
}
