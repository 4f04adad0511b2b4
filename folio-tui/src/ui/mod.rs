//! Top-level UI layout - navbar, scrolling page body, status bar, overlays.

pub mod budget_slider;
pub mod contact_form;
pub mod navbar;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use folio_core::FormPhase;

use crate::app::AppState;
use crate::theme::Theme;

/// Pixels of page scroll per terminal row.
pub const PX_PER_ROW: f64 = 16.0;

/// Pixels per terminal column, used to resolve navbar widths.
pub const PX_PER_COL: f32 = 8.0;

const HERO_ROWS: u16 = 6;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = Theme::for_mode(app.page.theme);
    f.render_widget(Block::default().style(theme.base()), f.area());

    let nav_height = navbar::height(&app.navbar.style);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    navbar::render(f, chunks[0], app, &theme);
    draw_body(f, chunks[1], app, &theme);
    status_bar::render(f, chunks[2], app, &theme);

    // Overlays on top.
    if app.page.menu_open {
        overlays::render_menu(f, chunks[0], chunks[1], &theme);
    }
    if app.form.phase() == FormPhase::Submitted {
        overlays::render_thank_you(f, chunks[1], app, &theme);
    }
    if let Some(active) = &app.toast {
        overlays::render_toast(f, chunks[1], &active.toast, &theme);
    }
}

/// Hero heading that scrolls away, then the contact form.
fn draw_body(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let scrolled_rows = (app.scroll_offset / PX_PER_ROW).floor().min(HERO_ROWS as f64) as u16;
    let hero_height = HERO_ROWS - scrolled_rows;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(hero_height), Constraint::Min(0)])
        .split(area);

    if hero_height > 0 {
        let hero = vec![
            Line::from(""),
            Line::from(Span::styled("Let's build something together", theme.accent_bold())),
            Line::from(Span::styled(
                "Tell me about your project and I'll get back to you within a day.",
                theme.secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled("[PgDn] scroll", theme.muted())),
        ];
        let skip = scrolled_rows as usize;
        let visible: Vec<Line> = hero.into_iter().skip(skip).collect();
        f.render_widget(
            Paragraph::new(visible).alignment(Alignment::Center),
            chunks[0],
        );
    }

    contact_form::render(f, chunks[1], app, theme);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rect of at most `width` columns, horizontally centred in `area`.
pub fn centered_width(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::mpsc;

    use folio_core::Site;

    fn render_to_string(app: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> AppState {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        AppState::new(Site::default_site().unwrap(), cmd_tx, resp_rx)
    }

    #[test]
    fn centered_width_clamps() {
        let area = Rect::new(0, 0, 100, 5);
        assert_eq!(centered_width(40, area), Rect::new(30, 0, 40, 5));
        assert_eq!(centered_width(400, area), area);
    }

    #[test]
    fn page_renders_form_and_budget() {
        let app = app();
        let screen = render_to_string(&app, 120, 48);
        assert!(screen.contains("Let's build something together"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("₹15,500"));
        assert!(screen.contains("Business"));
    }

    #[test]
    fn hero_scrolls_away() {
        let mut app = app();
        app.scroll_by(200.0);
        let screen = render_to_string(&app, 120, 48);
        assert!(!screen.contains("Let's build something together"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app();
        let _ = render_to_string(&app, 20, 6);
    }
}
