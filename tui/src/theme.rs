//! Color theme and glyphs for the Cupid TUI.
//!
//! Rose and burgundy on a dark ink background by default, with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use cupid_engine::{ToastKind, UiOptions};

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(26, 16, 22);
    pub const BG_PANEL: Color = Color::Rgb(38, 22, 32);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(64, 32, 50);
    pub const BORDER: Color = Color::Rgb(120, 64, 92);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 240, 245); // lavender blush
    pub const TEXT_SECONDARY: Color = Color::Rgb(236, 200, 214);
    pub const TEXT_MUTED: Color = Color::Rgb(170, 130, 150);

    // === Brand ===
    pub const HOT_PINK: Color = Color::Rgb(255, 105, 180);
    pub const DEEP_PINK: Color = Color::Rgb(255, 20, 147);
    pub const LIGHT_PINK: Color = Color::Rgb(255, 182, 193);
    pub const BURGUNDY: Color = Color::Rgb(128, 0, 32);

    // === Semantic ===
    pub const GOLD: Color = Color::Rgb(230, 195, 132);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub heart: Color,
    pub yes_bg: Color,
    pub yes_fg: Color,
    pub no_bg: Color,
    pub no_fg: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            border: colors::BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::HOT_PINK,
            accent: colors::DEEP_PINK,
            heart: colors::DEEP_PINK,
            yes_bg: colors::DEEP_PINK,
            yes_fg: colors::TEXT_PRIMARY,
            no_bg: colors::LIGHT_PINK,
            no_fg: colors::BURGUNDY,
            warning: colors::GOLD,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::LightMagenta,
            accent: Color::LightRed,
            heart: Color::LightRed,
            yes_bg: Color::White,
            yes_fg: Color::Black,
            no_bg: Color::Black,
            no_fg: Color::White,
            warning: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and the heart sprite.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub heart: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub bow: &'static str,
    pub rose: &'static str,
    pub wink: &'static str,
    pub smitten: &'static str,
    pub chocolate: &'static str,
    pub warning: &'static str,
    pub balloon: &'static str,
    pub sprite_fill: char,
    pub divider: &'static str,
    pub slot: &'static str,
    pub focus: &'static str,
    pub arrows: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "<3",
            yes: "<3",
            no: "</3",
            bow: ">>->",
            rose: "@}->-",
            wink: ";)",
            smitten: ":)",
            chocolate: "",
            warning: "!",
            balloon: "O",
            sprite_fill: '#',
            divider: "-",
            slot: ".",
            focus: ">",
            arrows: "Left/Right",
        }
    } else {
        Glyphs {
            heart: "💗",
            yes: "💖",
            no: "💔",
            bow: "🏹",
            rose: "🌹",
            wink: "😉",
            smitten: "🥰",
            chocolate: "🍫",
            warning: "⚠",
            balloon: "🎈",
            sprite_fill: '█',
            divider: "─",
            slot: "·",
            focus: "▸",
            arrows: "←/→",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style, ToastKind};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(bg: Color, fg: Color, focused: bool) -> Style {
        let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    #[must_use]
    pub fn toast(palette: &Palette, kind: ToastKind) -> Style {
        let fg = match kind {
            ToastKind::Escalation => palette.accent,
            ToastKind::Warning => palette.warning,
        };
        Style::default()
            .fg(fg)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use cupid_engine::UiOptions;
    use unicode_width::UnicodeWidthStr;

    use super::{Palette, glyphs, palette};

    #[test]
    fn ascii_glyphs_are_plain_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.heart, g.yes, g.no, g.bow, g.rose, g.wink, g.smitten, g.balloon, g.divider, g.slot,
            g.arrows,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
        assert!(g.sprite_fill.is_ascii());
    }

    #[test]
    fn divider_is_single_cell() {
        for ascii_only in [false, true] {
            let g = glyphs(UiOptions {
                ascii_only,
                ..UiOptions::default()
            });
            assert_eq!(g.divider.width(), 1);
        }
    }

    #[test]
    fn high_contrast_selects_override() {
        let hc = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_eq!(hc.bg_dark, Palette::high_contrast().bg_dark);
        assert_ne!(hc.bg_dark, Palette::standard().bg_dark);
    }
}
