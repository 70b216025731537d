//! Motion on the card: the pop-in on each new stage, the wobble after a
//! "no", and balloons over the summary after a "yes".

use std::f32::consts::TAU;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use cupid_engine::{CardEffect, CardEffectKind, Celebration};

use crate::theme::{Glyphs, Palette};

/// Fraction of its resting size the card pops in from.
const POP_FROM: f32 = 0.6;
const WOBBLES: f32 = 3.0;
const WOBBLE_CELLS: f32 = 2.0;
const BALLOONS: usize = 9;

/// Where the card sits this frame, given where it rests.
#[must_use]
pub fn card_area(effect: Option<&CardEffect>, resting: Rect, viewport: Rect) -> Rect {
    let Some(effect) = effect else {
        return resting;
    };
    match effect.kind() {
        CardEffectKind::PopScale => popped(resting, effect.progress()),
        CardEffectKind::Shake => nudged(resting, wobble(effect.progress()), viewport),
    }
}

/// The card grown around its centre; quick at first, then settling.
fn popped(resting: Rect, progress: f32) -> Rect {
    let settled = 1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3);
    let fraction = POP_FROM + (1.0 - POP_FROM) * settled;
    let shrink = |len: u16| ((f32::from(len) * fraction).round() as u16).clamp(1.min(len), len);
    let width = shrink(resting.width);
    let height = shrink(resting.height);
    Rect {
        x: resting.x + (resting.width - width) / 2,
        y: resting.y + (resting.height - height) / 2,
        width,
        height,
    }
}

/// Sideways offset in cells, dying away as the wobble ends.
fn wobble(progress: f32) -> i32 {
    let t = progress.clamp(0.0, 1.0);
    ((t * TAU * WOBBLES).sin() * WOBBLE_CELLS * (1.0 - t)).round() as i32
}

fn nudged(resting: Rect, dx: i32, viewport: Rect) -> Rect {
    let left = i32::from(viewport.x);
    let right = (i32::from(viewport.right()) - i32::from(resting.width)).max(left);
    let x = (i32::from(resting.x) + dx).clamp(left, right);
    Rect {
        x: u16::try_from(x).unwrap_or(resting.x),
        ..resting
    }
}

/// Balloons floating up through `area`, drawn over whatever is there.
pub(crate) fn draw_balloons(
    frame: &mut Frame,
    celebration: &Celebration,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let glyph_width = u16::try_from(glyphs.balloon.width()).unwrap_or(1).max(1);
    if area.height == 0 || area.width < glyph_width {
        return;
    }
    let colors = [palette.primary, palette.warning, palette.accent];
    let across = f32::from(area.width - glyph_width);
    let up = f32::from(area.height - 1);

    for balloon in celebration.balloons(BALLOONS) {
        let x = area.x + (balloon.column * across).round() as u16;
        let y = area.bottom() - 1 - (balloon.rise * up).round() as u16;
        let style = Style::default()
            .fg(colors[balloon.lane % colors.len()])
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Span::styled(glyphs.balloon, style),
            Rect::new(x, y, glyph_width, 1),
        );
    }
}
