//! UI rendering for the home and board screens.

use super::app::{App, NameField, Screen};
use crate::presenter;
use noughts_core::{Cell, Coord, Mark, RoundState, SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * SIZE as u16 + (SIZE as u16 - 1);
const GRID_HEIGHT: u16 = CELL_HEIGHT * SIZE as u16 + (SIZE as u16 - 1);

/// Draws whichever screen is active.
///
/// Takes the app mutably to record where each cell landed, which is what
/// mouse clicks are matched against.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Players / outcome
            Constraint::Min(GRID_HEIGHT),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Home => {
            draw_home(frame, chunks[1].union(chunks[2]), app);
            draw_help(frame, chunks[3], "Tab switch field · Enter play · Esc quit");
        }
        Screen::Board => {
            draw_players(frame, chunks[1], app);
            draw_board(frame, chunks[2], app);
            let help = match app.notice() {
                Some(notice) => notice.to_string(),
                None => "Arrows move · Enter/1-9/click mark · r reset · Esc back · q quit"
                    .to_string(),
            };
            draw_help(frame, chunks[3], &help);
        }
    }
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    let config = app.config();
    draw_name_field(frame, rows[0], app, NameField::X, config.x_name());
    draw_name_field(frame, rows[1], app, NameField::O, config.o_name());
}

fn draw_name_field(frame: &mut Frame, area: Rect, app: &App, field: NameField, default: &str) {
    let (label, mark) = match field {
        NameField::X => ("Player X", Mark::X),
        NameField::O => ("Player O", Mark::O),
    };
    let typed = app.name_input(field);
    let focused = app.focus() == field;

    let text = if typed.is_empty() {
        Span::styled(default.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(typed.to_string(), mark_style(mark))
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();

    let line = match engine.state() {
        RoundState::InProgress => {
            let turn = engine.current_player().mark();
            let spans: Vec<Span> = [Mark::X, Mark::O]
                .into_iter()
                .flat_map(|mark| {
                    let player = engine.player(mark);
                    let mut style = mark_style(mark);
                    if mark == turn {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    [
                        Span::styled(format!(" {} {} ", mark, player.name()), style),
                        Span::raw("   "),
                    ]
                })
                .collect();
            Line::from(spans)
        }
        RoundState::Over(_) => Line::from(Span::styled(
            presenter::status_text(engine),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    };

    let bar = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &mut App) {
    let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(alternating(CELL_HEIGHT))
        .split(grid);

    for row in 0..SIZE {
        let row_area = rows[row * 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(alternating(CELL_WIDTH))
            .split(row_area);

        for col in 0..SIZE {
            let Some(coord) = Coord::new(row, col) else {
                continue;
            };
            let cell_area = cols[col * 2];
            app.set_cell_area(coord, cell_area);
            draw_cell(frame, cell_area, app, coord);
            if col + 1 < SIZE {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row + 1 < SIZE {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let engine = app.engine();
    let cell = engine.board().get(coord);

    let (symbol, mut style) = match cell {
        Cell::Empty => (
            (coord.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => (presenter::glyph(cell).to_string(), mark_style(mark)),
    };

    let winning = engine
        .winning_cells()
        .is_some_and(|cells| cells.contains(&coord));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if coord == app.cursor() && !engine.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Cell, separator, cell, separator, cell.
fn alternating(cell: u16) -> Vec<Constraint> {
    (0..SIZE * 2 - 1)
        .map(|i| {
            if i % 2 == 0 {
                Constraint::Length(cell)
            } else {
                Constraint::Length(1)
            }
        })
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
