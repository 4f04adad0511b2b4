//! Bottom status bar - key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::FormPhase;

use crate::app::{AppState, StatusLevel};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let hints = match app.form.phase() {
        FormPhase::Editing => " Tab:next  PgUp/PgDn:scroll  F2:menu  ^T:theme  ^Q:quit",
        FormPhase::Submitting => " Sending…  ^Q:quit",
        FormPhase::Submitted => " Enter:send another  ^T:theme  ^Q:quit",
    };

    let mut spans: Vec<Span> = Vec::new();
    if app.form.phase() == FormPhase::Editing {
        spans.push(Span::styled(format!(" [{}]", app.focus.label()), theme.accent()));
    }
    spans.push(Span::styled(hints, theme.muted()));
    spans.push(Span::styled(
        format!(" | {:.0}%", app.scroll_progress() * 100.0),
        theme.muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme.accent(),
            StatusLevel::Warning => theme.warning(),
            StatusLevel::Error => theme.negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
