use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, CONTROLS_HINT};

/// Renders the score on the left of the HUD row and, when room allows,
/// the controls hint on the right.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let score_text = format!("Score: {score}");
    let score_width = u16::try_from(score_text.width()).unwrap_or(u16::MAX);

    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Length(score_width), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_text).style(
            Style::default()
                .fg(theme.score)
                .add_modifier(Modifier::BOLD),
        ),
        score_area,
    );

    if !hint_fits(hint_area) {
        return;
    }

    frame.render_widget(
        Paragraph::new(CONTROLS_HINT)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hint)),
        hint_area,
    );
}

/// Leaves at least one blank column between score and hint.
fn hint_fits(area: Rect) -> bool {
    CONTROLS_HINT.width() < usize::from(area.width)
}
