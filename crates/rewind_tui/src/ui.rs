//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_engine::{BOARD_SIDE, Cell, Coordinate, GameStatus, Mark, Projection};

use crate::app::{App, Focus};

const HELP: &str =
    "arrows: move  enter: play/jump  1-9: play cell  tab: board/moves  f: flip moves  q: quit";

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let projection = app.projection();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and info
            Constraint::Length(if app.show_help() { 1 } else { 0 }),
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &projection);
    draw_info(frame, body[1], app, &projection);

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, projection: &Projection) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..BOARD_SIDE {
        draw_row(frame, rows[row * 2], app, projection, row);
        if row < BOARD_SIDE - 1 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, projection: &Projection, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..BOARD_SIDE {
        draw_cell(frame, cols[col * 2], app, projection, Coordinate { row, col });
        if col < BOARD_SIDE - 1 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, projection: &Projection, pos: Coordinate) {
    let index = pos.to_index();
    let cell = projection.board.get(index).unwrap_or_default();

    let (symbol, base_style) = match cell {
        Cell::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_line = projection
        .winning_line
        .is_some_and(|line| line.contains(&index));
    let style = if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, projection: &Projection) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status_color = match projection.status {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress { .. } => Color::Yellow,
    };
    let status = Paragraph::new(projection.status_text())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let order = if app.game().moves_descending() {
        "Moves (from game start)"
    } else {
        "Moves (latest first)"
    };
    let moves_focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = projection
        .moves
        .iter()
        .map(|entry| {
            let mut style = Style::default();
            if entry.is_bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if moves_focused && entry.step == app.selected_step() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if entry.step == app.game().step_number() { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, entry.step + 1, entry.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(order)
            .borders(Borders::ALL)
            .border_style(focus_style(moves_focused)),
    );
    frame.render_widget(list, chunks[1]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
