//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::View;
use crate::games::tictactoe::{Player, Position, Square};
use crate::theme::Theme;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;
const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "←↑↓→ move · Enter/Space or 1-9 play · n new game · t theme · q quit";

/// Styles for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    base: Style,
    title: Style,
    status: Style,
    grid: Style,
    empty: Style,
    x: Style,
    o: Style,
    cursor_bg: Color,
}

/// Background of the selected cell.
pub fn cursor_background(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Yellow,
        Theme::Dark => Color::Blue,
    }
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            base: Style::default().fg(Color::Black).bg(Color::White),
            title: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::Magenta),
            grid: Style::default().fg(Color::DarkGray),
            empty: Style::default().fg(Color::DarkGray),
            x: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            o: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            cursor_bg: cursor_background(theme),
        },
        Theme::Dark => Palette {
            base: Style::default().fg(Color::White).bg(Color::Black),
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::Yellow),
            grid: Style::default().fg(Color::DarkGray),
            empty: Style::default().fg(Color::DarkGray),
            x: Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
            o: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            cursor_bg: cursor_background(theme),
        },
    }
}

/// Splits the frame into title, board, status and footer areas.
fn sections(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(2),            // Theme + help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Screen rectangles of the 9 cells, row-major, for a frame of size `area`.
///
/// Rendering and mouse hit-testing both go through here.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(sections(area)[1], BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_columns(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Position of the cell containing the terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(area)
        .iter()
        .position(|cell| {
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
        .and_then(Position::from_index)
}

/// Renders the game board with cursor highlight.
pub fn draw(frame: &mut Frame, view: &View) {
    let area = frame.area();
    let colors = palette(view.theme);
    let [title_area, board_area, status_area, footer_area] = sections(area);

    frame.render_widget(Block::default().style(colors.base), area);

    // Title
    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(colors.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    // Board
    draw_grid(frame, board_area, &colors);
    for (pos, cell) in Position::ALL.into_iter().zip(cell_areas(area)) {
        draw_cell(frame, cell, view, pos, &colors);
    }

    // Status
    let status_text = Paragraph::new(view.status_message.as_str())
        .style(colors.status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(colors.grid));
    frame.render_widget(status_text, status_area);

    // Footer
    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("Theme: {}  ", view.theme)),
            Span::styled(format!("[t] {}", view.theme_label()), colors.title),
        ]),
        Line::from(Span::styled(HELP, colors.grid)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

fn draw_grid(frame: &mut Frame, board_section: Rect, colors: &Palette) {
    let board_area = center_rect(board_section, BOARD_WIDTH, BOARD_HEIGHT);
    for offset in [CELL_HEIGHT, 2 * CELL_HEIGHT + 1] {
        let line_area = Rect {
            y: board_area.y + offset,
            height: 1,
            ..board_area
        };
        if line_area.y < board_area.y + board_area.height {
            let sep = Paragraph::new("─".repeat(board_area.width as usize)).style(colors.grid);
            frame.render_widget(sep, line_area);
        }
    }
    for offset in [CELL_WIDTH, 2 * CELL_WIDTH + 1] {
        let line_area = Rect {
            x: board_area.x + offset,
            width: 1,
            ..board_area
        };
        if line_area.x < board_area.x + board_area.width {
            let sep = Paragraph::new(vec![Line::from("│"); board_area.height as usize])
                .style(colors.grid);
            frame.render_widget(sep, line_area);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &View, pos: Position, colors: &Palette) {
    let (symbol, base_style) = match view.board.get(pos) {
        Square::Empty => (" · ", colors.empty),
        Square::Occupied(Player::X) => (" X ", colors.x),
        Square::Occupied(Player::O) => (" O ", colors.o),
    };

    let style = if pos == view.selected {
        base_style.bg(colors.cursor_bg)
    } else {
        base_style
    };

    if pos == view.selected {
        frame.render_widget(Block::default().style(Style::default().bg(colors.cursor_bg)), area);
    }

    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, middle);
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
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
