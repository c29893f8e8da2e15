use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FRUIT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, Theme,
};
use crate::engine::{GameStatus, Snapshot};
use crate::grid::{Cell, GridSize};
use crate::input::Direction;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Renders the full frame from a read-only engine snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);
    let theme = hud_info.theme;

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_field(play_area, snapshot.bounds));
    frame.render_widget(block, play_field(play_area, snapshot.bounds));

    render_fruit(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    if snapshot.status == GameStatus::Over {
        render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            hud_info.best_score.max(snapshot.score),
            snapshot.death_reason,
            theme,
        );
    }
}

/// The bordered field sized to the grid, clipped to `area`.
fn play_field(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: bounds.width.saturating_add(2).min(area.width),
        height: bounds.height.saturating_add(2).min(area.height),
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, snapshot.fruit) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FRUIT, Style::new().fg(theme.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let last = snapshot.segments.len().saturating_sub(1);
    let buffer = frame.buffer_mut();

    // Tail first so the head is drawn last and stays visible.
    for (index, segment) in snapshot.segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, render};
    use crate::config::{GLYPH_FRUIT, GLYPH_SNAKE_HEAD_RIGHT, GameConfig, THEME_CLASSIC};
    use crate::engine::GameEngine;
    use crate::fruit::Fruit;
    use crate::grid::{Cell, GridSize};
    use crate::ui::hud::HudInfo;

    #[test]
    fn cells_map_inside_the_border() {
        let inner = Rect::new(1, 1, 10, 5);
        let bounds = GridSize {
            width: 10,
            height: 5,
        };

        assert_eq!(logical_to_terminal(inner, bounds, Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, bounds, Cell::new(9, 4)), Some((10, 5)));
        assert_eq!(logical_to_terminal(inner, bounds, Cell::new(10, 0)), None);
        assert_eq!(logical_to_terminal(inner, bounds, Cell::new(-1, 0)), None);
    }

    #[test]
    fn frame_shows_head_and_fruit() {
        let mut engine =
            GameEngine::with_seed(GameConfig::new(10, 6), 1).expect("valid config");
        engine.fruit = Fruit::new(Cell::new(0, 0));
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).expect("test terminal");

        terminal
            .draw(|frame| {
                render(
                    frame,
                    &engine.snapshot(),
                    &HudInfo {
                        best_score: 0,
                        theme: &THEME_CLASSIC,
                    },
                )
            })
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        // Border occupies row 0 and column 0; head sits at (5, 3).
        assert_eq!(buffer[(6, 4)].symbol(), GLYPH_SNAKE_HEAD_RIGHT);
        assert_eq!(buffer[(1, 1)].symbol(), GLYPH_FRUIT);
    }
}
