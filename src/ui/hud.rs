use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Palette;
use crate::game::GameState;

const HUD_MARGIN_X: u16 = 1;
const KEY_HINT: &str = "arrows/WASD move | R restart | Q quit";

/// Renders the score row and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    palette: &Palette,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let score_width = score_text(state.score).chars().count();
    let hint_width = KEY_HINT.chars().count();
    let show_hint = usize::from(hud_area.width) > score_width + hint_width;
    let hint_length = if show_hint { hint_width as u16 } else { 0 };
    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_length)])
            .areas(hud_area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, palette)).alignment(Alignment::Left),
        score_area,
    );

    if show_hint {
        frame.render_widget(
            Paragraph::new(Line::from(KEY_HINT))
                .alignment(Alignment::Right)
                .style(Style::default().fg(palette.hud_muted)),
            hint_area,
        );
    }

    play_area
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

fn score_line(score: u32, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(palette.hud_text)
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
