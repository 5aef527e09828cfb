use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameOverReason;

/// Draws the pause notice centered over the play area.
pub fn render_pause_banner(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_banner(
        frame,
        area,
        vec!["PAUSED".to_owned(), "Press P to continue".to_owned()],
        theme,
    );
}

/// Draws the game-over notice with the final score.
pub fn render_game_over_banner(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reason: Option<GameOverReason>,
    theme: &Theme,
) {
    let mut lines = vec!["GAME OVER!".to_owned(), format!("Final Score: {score}")];
    if let Some(reason) = reason {
        lines.push(format!("Cause: {}", reason_text(reason)));
    }
    lines.push("Press Q to quit".to_owned());

    render_banner(frame, area, lines, theme);
}

fn reason_text(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::Quit => "quit",
        GameOverReason::WallCollision => "hit wall",
        GameOverReason::SelfCollision => "hit yourself",
        GameOverReason::BoardFull => "board full",
    }
}

fn render_banner(frame: &mut Frame<'_>, area: Rect, lines: Vec<String>, theme: &Theme) {
    let text_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    // Border plus one column of padding on each side.
    let width = u16::try_from(text_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_popup(area, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.banner)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            )
            .block(Block::bordered().border_style(Style::default().fg(theme.border))),
        popup,
    );
}

/// Centers a `width` x `height` rect in `area`, shrinking it to fit.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    center
}
