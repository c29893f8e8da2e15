use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::engine::{GameStatus, Snapshot};

const HUD_MARGIN_X: u16 = 1;

/// Values the HUD shows that the engine does not track.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Highest score seen since the process started.
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let left = format!(
        "{}x{}  {}",
        snapshot.bounds.width,
        snapshot.bounds.height,
        status_text(snapshot.status)
    );
    let right = format!(
        "Length {}  Score {}  Best {}",
        snapshot.segments.len(),
        snapshot.score,
        info.best_score.max(snapshot.score)
    );

    frame.render_widget(
        Paragraph::new(status_line(
            &left,
            &right,
            usize::from(hud_area.width),
            info.theme,
        )),
        hud_area,
    );

    play_area
}

fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::Over => "over",
    }
}

/// Left text flush left, right text flush right. The right side wins when
/// both do not fit.
fn status_line(left: &str, right: &str, width: usize, theme: &Theme) -> Line<'static> {
    let right_width = right.width();
    let left_room = width.saturating_sub(right_width + 1);
    let left = if left.width() <= left_room { left } else { "" };
    let gap = width.saturating_sub(left.width() + right_width);

    Line::from(vec![
        Span::styled(left.to_owned(), Style::default().fg(theme.hud_muted)),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            right.to_owned(),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
