//! TUI rendering for Cupid using ratatui.

mod effects;
mod heart;
mod input;
mod theme;
mod ui_inline;

pub use effects::card_area;
pub use heart::{BASE_HEART_WIDTH, heart_sprite};
pub use input::{InputPump, apply_key, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use ui_inline::{INLINE_VIEWPORT_HEIGHT, clear_inline_viewport, draw as draw_inline};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use cupid_engine::{Affordance, App, ButtonFocus, GlobalCounters, Stage, Toast, ToastKind, wording};

const CARD_MAX_WIDTH: u16 = 72;
const YES_BASE_WIDTH: u16 = 12;
const NO_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let viewport = chunks[0];
    let card_width = viewport.width.min(CARD_MAX_WIDTH);
    let base = Rect {
        x: viewport.x + (viewport.width.saturating_sub(card_width) / 2),
        y: viewport.y,
        width: card_width,
        height: viewport.height,
    };
    let card = card_area(app.card_effect(), base, viewport);

    draw_card(frame, app, card, &palette, &glyphs);
    if let Some(celebration) = app.celebration() {
        effects::draw_balloons(frame, celebration, viewport, &palette, &glyphs);
    }
    draw_key_hints(frame, app, chunks[1], &palette, &glyphs);

    if let Some(toast) = app.toast() {
        draw_toast(frame, toast, viewport, &palette, &glyphs);
    }
}

fn draw_card(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.session().stage() {
        Stage::Counting => draw_counting(frame, app, inner, palette, glyphs),
        Stage::Proposal => draw_proposal(frame, app, inner, palette, glyphs),
        Stage::Answered => draw_answered(frame, app, inner, palette, glyphs),
    }
}

fn title_line(text: &str, glyph: &str, palette: &Palette) -> Line<'static> {
    let text = if glyph.is_empty() {
        text.to_string()
    } else {
        format!("{text} {glyph}")
    };
    Line::from(Span::styled(text, styles::title(palette)))
}

fn draw_counting(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title, instruction, message
            Constraint::Min(1),    // Heart
            Constraint::Length(1), // Tap counter
        ])
        .split(area);

    let message = app.progress_message().unwrap_or_default();
    let header = vec![
        Line::from(""),
        title_line(wording::COUNTING_TITLE, glyphs.bow, palette),
        Line::from(Span::styled(
            wording::instruction(app.rules().heart_clicks),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    let scale = app.cosmetics().heart_scale() * app.heart_pulse();
    let width = heart::fitted_width(scale, chunks[1]);
    let sprite: Vec<Line> = heart::heart_sprite(width, glyphs.sprite_fill)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(palette.heart))))
        .collect();
    let sprite_height = u16::try_from(sprite.len()).unwrap_or(u16::MAX);
    let heart_area = center_vertically(chunks[1], sprite_height);
    frame.render_widget(
        Paragraph::new(sprite).alignment(Alignment::Center),
        heart_area,
    );

    let session = app.session();
    let counter = format!(
        "{} {} / {}",
        glyphs.heart,
        session.click_count(),
        app.rules().heart_clicks
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            counter,
            Style::default().fg(palette.text_muted),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

fn draw_proposal(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(2),             // Withdrawal notice
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            title_line(wording::PROPOSAL_TITLE, glyphs.rose, palette),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );

    let show_no = !app.no_withdrawn();
    let row = chunks[1];
    let reserved = if show_no { NO_WIDTH + BUTTON_GAP } else { 0 };
    let yes_width = yes_button_width(app.cosmetics().yes_scale, row.width.saturating_sub(reserved));
    let total = yes_width + reserved;
    let x0 = row.x + row.width.saturating_sub(total) / 2;

    let yes_rect = Rect {
        x: x0,
        y: row.y,
        width: yes_width,
        height: row.height,
    };
    let yes_label = format!("{} {}", wording::YES_LABEL, glyphs.yes);
    draw_button(
        frame,
        yes_rect,
        &yes_label,
        styles::button(palette.yes_bg, palette.yes_fg, app.focus() == ButtonFocus::Yes),
        app.focus() == ButtonFocus::Yes,
        glyphs,
    );

    if show_no {
        let no_rect = Rect {
            x: x0 + yes_width + BUTTON_GAP,
            y: row.y,
            width: NO_WIDTH,
            height: row.height,
        }
        .intersection(row);
        let no_label = format!("{} {}", wording::NO_LABEL, glyphs.no);
        draw_button(
            frame,
            no_rect,
            &no_label,
            styles::button(palette.no_bg, palette.no_fg, app.focus() == ButtonFocus::No),
            app.focus() == ButtonFocus::No,
            glyphs,
        );
    } else {
        let notice = format!("{} {}", wording::WITHDRAWN_NOTICE, glyphs.wink);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    notice,
                    Style::default()
                        .fg(palette.text_secondary)
                        .add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center),
            chunks[2],
        );
    }
}

/// Yes-button width for `scale`, capped at `available`.
fn yes_button_width(scale: f32, available: u16) -> u16 {
    let wanted = (f32::from(YES_BASE_WIDTH) * scale.max(1.0)).round() as u16;
    wanted.min(available).max(YES_BASE_WIDTH.min(available))
}

fn draw_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    style: Style,
    focused: bool,
    glyphs: &Glyphs,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .style(style);
    let text = if focused {
        format!("{} {label}", glyphs.focus)
    } else {
        label.to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_answered(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let summary = app.summary().unwrap_or_default();
    let divider_width = usize::from(area.width.saturating_sub(8).min(40));

    let mut lines = vec![
        Line::from(""),
        title_line(wording::ANSWERED_TITLE, glyphs.smitten, palette),
        Line::from(""),
        Line::from(Span::styled(
            wording::ANSWERED_SUBTITLE,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            glyphs.divider.repeat(divider_width),
            Style::default().fg(palette.border),
        )),
        Line::from(""),
    ];
    lines.extend(summary_lines(summary, palette, glyphs));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub(crate) fn summary_lines(
    summary: GlobalCounters,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(palette.text_primary)
        .add_modifier(Modifier::BOLD);
    let value = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled(format!("{} {}: ", glyphs.yes, wording::YES_COUNT_LABEL), label),
            Span::styled(summary.yes_total.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{} {}: ", glyphs.no, wording::NO_COUNT_LABEL), label),
            Span::styled(summary.no_total.to_string(), value),
        ]),
    ]
}

fn draw_toast(frame: &mut Frame, toast: &Toast, viewport: Rect, palette: &Palette, glyphs: &Glyphs) {
    let icon = match toast.kind() {
        ToastKind::Escalation => glyphs.chocolate,
        ToastKind::Warning => glyphs.warning,
    };
    let text = if icon.is_empty() {
        toast.text().to_string()
    } else {
        format!("{} {icon}", toast.text())
    };
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(viewport.width);
    let height = 3.min(viewport.height);
    let area = Rect {
        x: viewport.x + viewport.width.saturating_sub(width) / 2,
        y: viewport.y + viewport.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let style = styles::toast(palette, toast.kind());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .style(Style::default().bg(palette.bg_highlight));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

pub(crate) fn key_hints(
    stage: Stage,
    no_offered: bool,
    glyphs: &Glyphs,
) -> Vec<(&'static str, &'static str)> {
    match stage {
        Stage::Counting => vec![("Space/Enter", "tap the heart"), ("q", "quit")],
        Stage::Proposal if no_offered => vec![
            (glyphs.arrows, "focus"),
            ("Enter", "choose"),
            ("y", "yes"),
            ("n", "no"),
            ("q", "quit"),
        ],
        Stage::Proposal => vec![("Enter/y", "yes"), ("q", "quit")],
        Stage::Answered => vec![("q", "quit")],
    }
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let no_offered = app.offers(Affordance::No);
    let mut spans = Vec::new();
    for (i, (key, action)) in key_hints(app.session().stage(), no_offered, glyphs)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled("  ", styles::key_hint(palette)));
        }
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use cupid_engine::{Stage, UiOptions};
    use ratatui::layout::Rect;

    use super::{YES_BASE_WIDTH, center_vertically, glyphs, key_hints, yes_button_width};

    #[test]
    fn yes_button_grows_and_caps() {
        assert_eq!(yes_button_width(1.0, 60), YES_BASE_WIDTH);
        assert_eq!(yes_button_width(1.7, 60), 20);
        assert_eq!(yes_button_width(10.8, 60), 60);
        assert_eq!(yes_button_width(3.0, 8), 8);
    }

    #[test]
    fn center_vertically_clamps() {
        let area = Rect::new(0, 10, 20, 10);
        assert_eq!(center_vertically(area, 4), Rect::new(0, 13, 20, 4));
        assert_eq!(center_vertically(area, 40), area);
    }

    #[test]
    fn withdrawn_proposal_hides_no_hint() {
        let glyphs = glyphs(UiOptions::default());
        let with_no = key_hints(Stage::Proposal, true, &glyphs);
        assert!(with_no.iter().any(|(k, _)| *k == "n"));
        let without = key_hints(Stage::Proposal, false, &glyphs);
        assert!(without.iter().all(|(k, _)| *k != "n"));
    }
}
