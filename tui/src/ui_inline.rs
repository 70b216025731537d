//! Inline TUI mode - a few rows under the shell prompt instead of the
//! alternate screen.

use ratatui::prelude::{Backend, Terminal};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use cupid_engine::{Affordance, App, ButtonFocus, Stage, wording};

use crate::theme::{Glyphs, Palette, glyphs, palette, styles};
use crate::{key_hints, summary_lines};

pub const INLINE_VIEWPORT_HEIGHT: u16 = 8;

/// Blank the inline viewport so the shell prompt resumes on a clean area.
pub fn clear_inline_viewport<B>(terminal: &mut Terminal<B>) -> Result<(), B::Error>
where
    B: Backend,
{
    terminal.draw(|frame| frame.render_widget(Clear, frame.area()))?;
    Ok(())
}

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let mut lines = match app.session().stage() {
        Stage::Counting => counting_lines(app, &palette, &glyphs),
        Stage::Proposal => proposal_lines(app, &palette, &glyphs),
        Stage::Answered => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", wording::ANSWERED_TITLE, glyphs.smitten),
                    styles::title(&palette),
                )),
                Line::from(Span::styled(
                    wording::ANSWERED_SUBTITLE,
                    Style::default().fg(palette.text_secondary),
                )),
            ];
            lines.extend(summary_lines(
                app.summary().unwrap_or_default(),
                &palette,
                &glyphs,
            ));
            lines
        }
    };

    if let Some(toast) = app.toast() {
        lines.push(Line::from(Span::styled(
            toast.text().to_string(),
            styles::toast(&palette, toast.kind()),
        )));
    }

    let body_height = area.height.saturating_sub(1);
    let body = Rect {
        height: body_height,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), body);

    if area.height > 0 {
        let hints = Rect {
            y: area.y + body_height,
            height: 1,
            ..area
        };
        let no_offered = app.offers(Affordance::No);
        let mut spans = Vec::new();
        for (key, action) in key_hints(app.session().stage(), no_offered, &glyphs) {
            spans.push(Span::styled(key, styles::key_highlight(&palette)));
            spans.push(Span::styled(format!(" {action}  "), styles::key_hint(&palette)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), hints);
    }
}

fn counting_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let session = app.session();
    let clicks = session.click_count();
    let total = app.rules().heart_clicks;
    let filled = usize::try_from(clicks.min(total)).unwrap_or(usize::MAX);
    let empty = usize::try_from(total.saturating_sub(clicks)).unwrap_or(0);

    vec![
        Line::from(Span::styled(
            format!("{} {}", wording::COUNTING_TITLE, glyphs.bow),
            styles::title(palette),
        )),
        Line::from(Span::styled(
            wording::instruction(total),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(vec![
            Span::styled(
                glyphs.heart.repeat(filled),
                Style::default().fg(palette.heart),
            ),
            Span::styled(
                glyphs.slot.repeat(empty),
                Style::default().fg(palette.text_muted),
            ),
        ]),
        Line::from(Span::styled(
            app.progress_message().unwrap_or_default().to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn proposal_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let yes_focused = app.focus() == ButtonFocus::Yes;
    let mut buttons = vec![Span::styled(
        format!(" {} {} ", wording::YES_LABEL, glyphs.yes),
        styles::button(palette.yes_bg, palette.yes_fg, yes_focused),
    )];

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", wording::PROPOSAL_TITLE, glyphs.rose),
            styles::title(palette),
        )),
        Line::from(""),
    ];

    if app.offers(Affordance::No) {
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            format!(" {} {} ", wording::NO_LABEL, glyphs.no),
            styles::button(palette.no_bg, palette.no_fg, !yes_focused),
        ));
        lines.push(Line::from(buttons));
    } else {
        lines.push(Line::from(buttons));
        lines.push(Line::from(Span::styled(
            format!("{} {}", wording::WITHDRAWN_NOTICE, glyphs.wink),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}
