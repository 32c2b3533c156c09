use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Game, Mode, Position};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game, stats: &SessionStats) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.draw_header(frame, rows[0], game, stats);
        self.draw_board(frame, rows[1], game);
        self.draw_footer(frame, rows[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, game: &Game, stats: &SessionStats) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let title = Paragraph::new(Span::styled(
            " Snake Game",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, halves[0]);

        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let stats_line = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(game.score.to_string(), value),
            Span::raw("   "),
            Span::styled("Best: ", label),
            Span::styled(stats.best_score.to_string(), value),
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(stats.clock(), value),
            Span::raw(" "),
        ]);
        frame.render_widget(
            Paragraph::new(stats_line).alignment(Alignment::Right),
            halves[1],
        );
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect, game: &Game) {
        // Two columns per cell keeps the board visually square.
        let board_width = game.cell_count() as u16 * 2 + 2;
        let board_height = game.cell_count() as u16 + 2;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(area);
        let board_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_height),
                Constraint::Min(0),
            ])
            .split(columns[1])[1];

        let head_style = Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(Color::Magenta);
        let food_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let empty_style = Style::default().fg(Color::DarkGray);

        let mut lines = Vec::with_capacity(game.cell_count() as usize);
        for y in 0..game.cell_count() {
            let mut spans = Vec::with_capacity(game.cell_count() as usize);
            for x in 0..game.cell_count() {
                let pos = Position::new(x, y);
                // Snake painted over food, food over empty cells.
                let cell = if pos == game.snake.head() {
                    Span::styled("■ ", head_style)
                } else if game.snake.covers(pos) {
                    Span::styled("■ ", body_style)
                } else if pos == game.food.position {
                    Span::styled("● ", food_style)
                } else {
                    Span::styled("· ", empty_style)
                };
                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        let title = match game.mode {
            Mode::Paused => " Snake [paused] ",
            Mode::Active => " Snake ",
        };
        let board = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Magenta))
                .title(title),
        );
        frame.render_widget(board, board_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let key = Style::default().fg(Color::Cyan);
        let controls = Line::from(vec![
            Span::raw(" "),
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("R", key),
            Span::raw(" to restart"),
        ]);
        frame.render_widget(Paragraph::new(controls), halves[0]);

        // Anchored to the bottom-right corner.
        let hint = Paragraph::new(Span::styled(
            "Press Esc to exit the game ",
            Style::default().fg(Color::LightMagenta),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(hint, halves[1]);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
