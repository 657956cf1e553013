use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table},
    Frame,
};
use timesheet_core::WeekView;

use crate::tui::app::{App, InputMode};

const CODE_WIDTH: u16 = 28;
const HOURS_WIDTH: u16 = 10;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let view = app.sheet.view();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Week navigation
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("Timeregistrering")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let nav = Paragraph::new(Line::from(vec![
        Span::styled("‹ Forrige uge   ", Style::default().fg(Color::DarkGray)),
        Span::styled(view.header.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("   Næste uge ›", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(nav, main_chunks[1]);

    draw_week_table(f, app, &view, main_chunks[2]);

    let status = Paragraph::new(app.status.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    f.render_widget(status, main_chunks[3]);

    let help = match app.input_mode {
        InputMode::Normal => "j/k: Dag | h/l: Uge | t: I dag | c/C: Kode | e: Timer | s: Gem | q: Afslut",
        InputMode::EditingHours => "Enter: Gem timer | Esc: Fortryd",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_week_table(f: &mut Frame, app: &mut App, view: &WeekView, area: Rect) {
    let editing = matches!(app.input_mode, InputMode::EditingHours);
    let selected = app.selected_day();

    let rows: Vec<Row> = view.days.iter().enumerate().map(|(i, day)| {
        let row_style = if day.weekend {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let code_style = if day.code.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let hours = if editing && i == selected {
            Span::styled(app.input.clone(), Style::default().fg(Color::Black).bg(Color::Cyan))
        } else if day.hours.is_empty() {
            Span::styled("0", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(day.hours.clone())
        };

        Row::new(vec![
            Span::styled(day.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(day.date_label.clone()),
            Span::styled(day.code_label, code_style),
            hours,
        ])
        .style(row_style)
    }).collect();

    let total = Row::new(vec![
        Span::styled("Total", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(""),
        Span::raw(""),
        Span::styled(view.total_label.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ])
    .top_margin(1);

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),           // Day
            Constraint::Length(6),           // Date
            Constraint::Length(CODE_WIDTH),  // Code
            Constraint::Length(HOURS_WIDTH), // Hours
        ]
    )
    .header(Row::new(vec!["Dag", "Dato", "Kode", "Timer"]).style(Style::default().fg(Color::Yellow)))
    .footer(total)
    .block(Block::default().title(format!(" Uge {} ", view.week_number)).borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);

    if editing {
        // border + highlight symbol + day + date + code columns, each followed by one space
        let x = area.x + 1 + 3 + 9 + 1 + 6 + 1 + CODE_WIDTH + 1 + app.cursor_position as u16;
        let y = area.y + 2 + selected as u16;
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), y));
    }
}
