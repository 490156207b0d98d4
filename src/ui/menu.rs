use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::Collision;
use crate::ui::hud::score_text;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    collision: Option<Collision>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let text_style = Style::default().fg(theme.game_over_text);
    let lines = vec![
        Line::styled(
            "Game Over",
            Style::default()
                .fg(theme.game_over_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(score_text(score), text_style),
        Line::styled(
            match collision {
                Some(Collision::Wall) => "Hit the wall",
                Some(Collision::SelfBite) => "Bit yourself",
                None => "",
            },
            Style::default().fg(theme.border_fg),
        ),
        Line::from(""),
        Line::styled("Press Enter to Restart", text_style),
        Line::styled("[Q]/[Esc] Quit", Style::default().fg(theme.border_fg)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
