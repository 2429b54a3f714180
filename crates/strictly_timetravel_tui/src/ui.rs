//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_timetravel::{Board, Cell, Mark, Position, Win};

use crate::app::{App, Focus};

const HELP: &str = "arrows/1-9 move · enter play · tab history · [ ] step · n new game · q quit";

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Time Travel - Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let game = app.game();
    let status_style = if game.winner().is_some() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(game.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(board_title(app))
        .border_style(focus_style(*app.focus() == Focus::Board));
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

    let board = app.game().current_board();
    let win = app.game().winner();
    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(
            frame,
            area,
            board,
            win.as_ref(),
            cursor,
            row,
            *app.show_hints(),
        );
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

/// Board panel title: the step on display plus draw and cursor hints.
fn board_title(app: &App) -> String {
    let game = app.game();
    let mut title = format!("Board (step {})", game.current_index());
    if game.is_draw() {
        title.push_str(" · board full");
    }
    if *app.focus() == Focus::Board {
        title.push_str(" · ");
        title.push_str(app.cursor().label());
    }
    title
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    win: Option<&Win>,
    cursor: Option<Position>,
    row: usize,
    show_hints: bool,
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

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        let index = row * 3 + col;
        let is_winning = win.is_some_and(|w| w.contains(index));
        let is_cursor = cursor.is_some_and(|pos| pos.index() == index);
        draw_cell(frame, area, board, index, is_winning, is_cursor, show_hints);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    index: usize,
    is_winning: bool,
    is_cursor: bool,
    show_hints: bool,
) {
    let (symbol, mut style) = match board.get(index).unwrap_or_default() {
        Cell::Empty if show_hints => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if is_winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let line = if entry.is_current {
                Line::from(Span::styled(
                    entry.label,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(entry.label, Style::default().fg(Color::Cyan)))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(focus_style(focused)),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = focused.then_some(*app.selected());
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
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
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
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
