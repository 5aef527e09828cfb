use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BORDER_ASCII, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD};
use crate::game::{GameState, GameStatus};
use crate::grid::{GridSize, Position};
use crate::ui::banner::{render_game_over_banner, render_pause_banner};
use crate::ui::hud::render_hud;

/// Draws game state into a ratatui frame with a fixed theme.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: &'static Theme,
}

impl Renderer {
    #[must_use]
    pub fn new(theme: &'static Theme) -> Self {
        Self { theme }
    }

    /// Renders the full game frame from immutable state.
    pub fn render(&self, frame: &mut Frame<'_>, state: &GameState) {
        let [play_area, hud_area] = split_screen(frame.area());

        let block = play_block(self.theme);
        let inner = block.inner(play_area);
        frame.render_widget(block, play_area);

        self.render_food(frame, inner, state);
        self.render_snake(frame, inner, state);
        render_hud(frame, hud_area, state.score, self.theme);

        match state.status {
            GameStatus::Paused => render_pause_banner(frame, play_area, self.theme),
            GameStatus::GameOver => render_game_over_banner(
                frame,
                play_area,
                state.score,
                state.game_over_reason,
                self.theme,
            ),
            GameStatus::Running => {}
        }
    }

    fn render_food(&self, frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
            return;
        };

        frame
            .buffer_mut()
            .set_string(x, y, GLYPH_FOOD, Style::new().fg(self.theme.food));
    }

    fn render_snake(&self, frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
        let head_style = Style::new()
            .fg(self.theme.snake_head)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::new().fg(self.theme.snake_body);

        let buffer = frame.buffer_mut();
        for (index, segment) in state.snake.segments().enumerate() {
            let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
                continue;
            };

            if index == 0 {
                buffer.set_string(x, y, GLYPH_SNAKE_HEAD, head_style);
            } else {
                buffer.set_string(x, y, GLYPH_SNAKE_BODY, body_style);
            }
        }
    }
}

/// Board size that fits inside the play frame for a terminal of `area`.
#[must_use]
pub fn board_bounds(area: Rect) -> GridSize {
    let [play_area, _] = split_screen(area);
    let inner = Block::bordered().inner(play_area);
    GridSize::new(inner.height, inner.width)
}

/// Play frame on top, one HUD row at the bottom.
fn split_screen(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area)
}

fn play_block(theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_set(BORDER_ASCII)
        .border_style(Style::new().fg(theme.border))
}

/// Maps a board cell into the frame, or `None` when it would be clipped.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.col).ok()?;
    let y_offset = u16::try_from(position.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
