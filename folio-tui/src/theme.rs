//! Colour palettes for the contact page, one per `ThemeMode`.
//!
//! # Palette
//! - **Background**: near-black (dark) / warm white (light)
//! - **Accent**: violet, used for focus and the navbar
//! - **Positive**: green (success toast)
//! - **Negative**: red (failed submission)
//! - **Warning**: amber (validation)
//! - **Muted**: secondary text and hints
//!
//! Tier style tokens from the site configuration (`green`, `blue`, ...) map
//! to colours through [`Theme::token_color`].

use ratatui::style::{Color, Modifier, Style};

use folio_core::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(12, 10, 18),
            surface: Color::Rgb(28, 24, 40),
            accent: Color::Rgb(167, 139, 250),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            muted: Color::Rgb(113, 113, 122),
            text_primary: Color::Rgb(244, 244, 245),
            text_secondary: Color::Rgb(161, 161, 170),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(250, 249, 246),
            surface: Color::Rgb(237, 233, 254),
            accent: Color::Rgb(109, 40, 217),
            positive: Color::Rgb(22, 163, 74),
            negative: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(180, 83, 9),
            muted: Color::Rgb(120, 113, 108),
            text_primary: Color::Rgb(24, 24, 27),
            text_secondary: Color::Rgb(82, 82, 91),
        }
    }

    /// Colour for a tier style token. Unknown tokens fall back to the accent.
    pub fn token_color(&self, token: &str) -> Color {
        match (token, self.mode.is_dark()) {
            ("green", true) => Color::Rgb(74, 222, 128),
            ("green", false) => Color::Rgb(22, 163, 74),
            ("blue", true) => Color::Rgb(96, 165, 250),
            ("blue", false) => Color::Rgb(37, 99, 235),
            ("purple", true) => Color::Rgb(192, 132, 252),
            ("purple", false) => Color::Rgb(147, 51, 234),
            ("pink", true) => Color::Rgb(244, 114, 182),
            ("pink", false) => Color::Rgb(219, 39, 119),
            ("red", true) => Color::Rgb(248, 113, 113),
            ("red", false) => Color::Rgb(220, 38, 38),
            _ => self.accent,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    /// Raised surface for overlays.
    pub fn panel(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn positive(&self) -> Style {
        Style::default().fg(self.positive)
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn token(&self, token: &str) -> Style {
        Style::default().fg(self.token_color(token))
    }

    /// Border for a focusable control.
    pub fn field_border(&self, focused: bool) -> Style {
        if focused {
            self.accent_bold()
        } else {
            self.muted()
        }
    }

    /// Blend `color` toward the background by `alpha` (0 = background,
    /// 1 = full colour). Non-RGB colours are returned unchanged.
    pub fn blend(&self, color: Color, alpha: f32) -> Color {
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let a = alpha.clamp(0.0, 1.0);
                let mix = |c: u8, base: u8| (base as f32 + (c as f32 - base as f32) * a).round() as u8;
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn tokens_differ_per_mode() {
        let dark = Theme::dark();
        let light = Theme::light();
        for token in ["green", "blue", "purple", "pink", "red"] {
            assert_ne!(dark.token_color(token), dark.accent, "{token}");
            assert_ne!(dark.token_color(token), light.token_color(token), "{token}");
        }
        assert_eq!(dark.token_color("teal"), dark.accent);
    }

    #[test]
    fn blend_endpoints() {
        let theme = Theme::dark();
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(theme.blend(white, 0.0), theme.background);
        assert_eq!(theme.blend(white, 1.0), white);
        assert_eq!(theme.blend(Color::Reset, 0.5), Color::Reset);
    }
}
