use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::Theme;

/// Renders the score row and returns the remaining area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, apples_eaten: u32, theme: &Theme) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(score_text(apples_eaten)))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    play_area
}

#[must_use]
pub fn score_text(apples_eaten: u32) -> String {
    format!("Score: {apples_eaten}")
}
