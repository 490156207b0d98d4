use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, Board, CELL_COLUMNS, GLYPH_FOOD, GLYPH_SEGMENT, Theme};
use crate::game::Snapshot;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, board: Board, theme: &Theme) {
    let area = frame.area();
    let board_area = board_area(area, board);
    let play_area = render_hud(frame, board_area, snapshot.apples_eaten, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if !snapshot.running {
        render_game_over_menu(
            frame,
            play_area,
            snapshot.apples_eaten,
            snapshot.collision,
            theme,
        );
        return;
    }

    render_food(frame, inner, board, snapshot.food, theme);
    render_snake(frame, inner, board, &snapshot.body, theme);
}

/// Centers the score row plus the bordered board inside `area`.
fn board_area(area: Rect, board: Board) -> Rect {
    let width = board.columns().saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = board.rows().saturating_add(3);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    centered
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, board: Board, food: Position, theme: &Theme) {
    let Some((x, y)) = board_to_terminal(inner, board, food) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).add_modifier(Modifier::BOLD),
    );
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    board: Board,
    body: &[Position],
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments share a cell.
    for (index, segment) in body.iter().enumerate().rev() {
        let Some((x, y)) = board_to_terminal(inner, board, *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_SEGMENT, Style::new().fg(color));
    }
}

/// Maps a pixel position to the terminal cell of its grid square.
fn board_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(board) {
        return None;
    }

    let column = u16::try_from(position.x / i32::from(board.unit_size)).ok()?;
    let row = u16::try_from(position.y / i32::from(board.unit_size)).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_COLUMNS));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
