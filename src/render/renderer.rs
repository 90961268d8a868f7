use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CellState, Controller, GameState, Position};
use crate::metrics::SessionMetrics;

/// Fixed palette: empty cells fade into the background, snakes draw in the
/// foreground with per-controller head colors, food gets the accent color.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &SessionMetrics,
        controls: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with scores and timing
        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render game grid or game over screen
        if state.game_over {
            let game_over = self.render_game_over(game_area, state, metrics);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, state);
            frame.render_widget(grid, game_area);
        }

        // Render footer with controls
        let footer = self.render_controls(chunks[2], controls);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid.size() {
            let mut spans = Vec::new();

            for x in 0..state.grid.size() {
                let pos = Position::new(x as i32, y as i32);

                let cell = match state.grid.get(pos) {
                    CellState::Food => Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    CellState::Snake => match state.snakes.iter().find(|s| s.head() == pos) {
                        Some(snake) => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(head_color(snake.controller))
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled("□ ", Style::default().fg(Color::Green)),
                    },
                    CellState::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Arena "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let mut spans = Vec::new();

        for (i, snake) in state.snakes.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{}: ", controller_label(snake.controller)),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                snake.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::raw("    "));
        spans.push(Span::styled("Ticks: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            state.ticks.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("    "));
        spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.best_score().to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("    "));
        spans.push(Span::styled("Time: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.format_time(),
            Style::default().fg(Color::White),
        ));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for snake in &state.snakes {
            text.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", controller_label(snake.controller)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    snake.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::Gray)),
            Span::styled(
                metrics.best_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("Games: ", Style::default().fg(Color::Gray)),
            Span::styled(
                metrics.games_played().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("Apples: ", Style::default().fg(Color::Gray)),
            Span::styled(
                metrics.apples_eaten().to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, controls: &str) -> Paragraph<'_> {
        let line = Line::from(Span::styled(
            controls.to_string(),
            Style::default().fg(Color::Gray),
        ));
        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn controller_label(controller: Controller) -> &'static str {
    match controller {
        Controller::Human => "You",
        Controller::Agent => "Agent",
    }
}

fn head_color(controller: Controller) -> Color {
    match controller {
        Controller::Human => Color::Cyan,
        Controller::Agent => Color::Magenta,
    }
}
