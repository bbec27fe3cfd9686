//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Screen};
use super::clock::format_elapsed;
use crate::games::tictactoe::{Board, GameStatus, Mark, Position, Square, WinLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

/// Draws the current screen.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::ModeSelect => {
            draw_mode_select(frame, chunks[1]);
            draw_help(frame, chunks[3], "1: Two Player | 2: Vs Computer | Q: Quit");
        }
        Screen::Playing => {
            draw_game(frame, chunks[1], app, now);

            let status = Paragraph::new(app.status_message())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Status"));
            frame.render_widget(status, chunks[2]);

            draw_help(
                frame,
                chunks[3],
                "1-9 or arrows + Enter: move | N: New game | M: Change mode | Q: Quit",
            );
        }
    }
}

fn draw_mode_select(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Choose a game mode"),
        Line::from(""),
        Line::from(Span::styled(
            "1  Two Player",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "2  Vs Computer",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mode"));
    frame.render_widget(menu, center_rect(area, 30, 8));
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let session = app.session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(7)])
        .split(area);

    let turn = match app.current_turn() {
        Some(mark) => format!("Turn: {}", mark),
        None => "Turn: -".to_string(),
    };
    let info = format!(
        "{}  |  {}  |  {}",
        session.mode().label(),
        turn,
        format_elapsed(app.clock().elapsed(now))
    );
    frame.render_widget(
        Paragraph::new(info)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        rows[0],
    );

    let winning = match session.status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };
    draw_board(frame, rows[1], session.board(), app.cursor(), winning);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<WinLine>,
) {
    let board_area = center_rect(area, 40, 7);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let cells = [row * 3, row * 3 + 1, row * 3 + 2];
        draw_row(frame, rows[row * 2], board, cursor, winning, cells);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<WinLine>,
    cells: [usize; 3],
) {
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

    for (i, cell) in cells.into_iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, cursor, winning, cell);
        if i < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<WinLine>,
    cell: usize,
) {
    let (symbol, base_style) = match board.get(cell) {
        Some(Square::Occupied(Mark::X)) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (format!(" {} ", cell + 1), Style::default().fg(Color::DarkGray)),
    };

    let style = if winning.is_some_and(|line| line.contains(cell)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cell == cursor.to_index() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
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
