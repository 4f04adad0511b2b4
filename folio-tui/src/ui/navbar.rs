//! Floating navbar. Geometry and tint come from the applied `StyleBundle`;
//! the bundle itself only changes when the scroll regime flips.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use folio_core::{Regime, StyleBundle};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::{centered_width, PX_PER_COL};

const LINKS: [&str; 4] = ["Home", "Work", "Services", "Contact"];

/// Rows taken by the navbar, including its top margin.
pub fn height(style: &StyleBundle) -> u16 {
    top_gap(style) + 3
}

fn top_gap(style: &StyleBundle) -> u16 {
    (style.top_rem / 2.0).round().clamp(0.0, 2.0) as u16
}

/// Navbar width in columns for a viewport `cols` wide.
pub fn width_cols(style: &StyleBundle, cols: u16) -> u16 {
    let px = style.effective_width(cols as f32 * PX_PER_COL);
    ((px / PX_PER_COL).round() as u16).min(cols)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let style = &app.navbar.style;
    let gap = top_gap(style).min(area.height);
    let bar = Rect {
        y: area.y + gap,
        height: area.height - gap,
        ..centered_width(width_cols(style, area.width), area)
    };
    if bar.width < 4 || bar.height < 3 {
        return;
    }

    let border_type = if style.border_radius_rem >= 1.0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };
    let background = theme.blend(theme.text_primary, style.background_alpha);
    let border = theme.blend(theme.accent, 0.5 + style.shadow_alpha);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background));

    let inner = block.inner(bar);
    f.render_widget(block, bar);

    let theme_icon = if app.page.theme.is_dark() { "☾" } else { "☀" };
    let mut spans = vec![Span::styled("folio", theme.accent_bold()), Span::raw("  ")];
    match app.navbar.regime {
        Regime::Expanded => {
            for (i, link) in LINKS.iter().enumerate() {
                let link_style = if i == LINKS.len() - 1 {
                    theme.text().add_modifier(Modifier::UNDERLINED)
                } else {
                    theme.secondary()
                };
                spans.push(Span::styled(*link, link_style));
                spans.push(Span::raw("  "));
            }
        }
        Regime::Collapsed => {
            spans.push(Span::styled("≡ F2", theme.secondary()));
            spans.push(Span::raw("  "));
        }
    }
    spans.push(Span::styled(theme_icon, theme.warning()));

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
