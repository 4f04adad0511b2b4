//! Contact form: text fields, service list, budget slider, message and the
//! send button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use folio_core::FormPhase;

use crate::app::{AppState, Focus};
use crate::theme::Theme;
use crate::ui::budget_slider;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let service_rows = app.site.services.len() as u16 + 2;

    let (left, right) = if area.width >= 80 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (cols[0], cols[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6 + service_rows), Constraint::Min(0)])
            .split(area);
        (rows[0], rows[1])
    };

    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(service_rows),
            Constraint::Min(0),
        ])
        .split(left);

    text_field(f, left_rows[0], "Name", &app.form.name, app.focus == Focus::Name, theme);
    text_field(f, left_rows[1], "Email", &app.form.email, app.focus == Focus::Email, theme);
    service_list(f, left_rows[2], app, theme);

    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(budget_slider::HEIGHT),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(right);

    budget_slider::render(
        f,
        right_rows[0],
        &app.site.budget,
        app.form.budget(),
        app.focus == Focus::Budget,
        theme,
    );
    message_field(f, right_rows[1], app, theme);
    send_button(f, right_rows[2], app, theme);
}

fn text_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused))
        .title(format!(" {label} "))
        .title_style(theme.field_border(focused));

    let mut spans = vec![Span::styled(value, theme.text())];
    if focused {
        spans.push(Span::styled("▏", theme.accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn service_list(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let focused = app.focus == Focus::Service;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused))
        .title(" Service ")
        .title_style(theme.field_border(focused));

    let lines: Vec<Line> = app
        .site
        .services
        .services()
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let selected = app.form.service.as_deref() == Some(service.id.as_str());
            let marker = if selected { "●" } else { "○" };
            let style = if focused && i == app.service_cursor {
                theme.accent().add_modifier(Modifier::REVERSED)
            } else if selected {
                theme.accent_bold()
            } else {
                theme.secondary()
            };
            Line::from(Span::styled(format!("{marker} {}", service.label), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn message_field(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let focused = app.focus == Focus::Message;
    let tone = app.form.tone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused))
        .title(Line::from(vec![
            Span::styled(" Message ", theme.field_border(focused)),
            Span::raw(tone.icon()),
            Span::raw(" "),
        ]));

    let mut text = app.form.message.clone();
    if focused {
        text.push('▏');
    }
    let para = Paragraph::new(text)
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(para, area);
}

fn send_button(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let focused = app.focus == Focus::Submit;
    let (label, style) = match app.form.phase() {
        FormPhase::Submitting => ("Launching…", theme.warning()),
        FormPhase::Submitted => ("Sent ✓", theme.positive()),
        FormPhase::Editing if focused => {
            ("Send message →", theme.accent_bold().add_modifier(Modifier::REVERSED))
        }
        FormPhase::Editing => ("Send message →", theme.accent()),
    };

    let mut spans = vec![Span::styled(format!(" {label} "), style)];
    if let Some(err) = app.form.last_error() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(err.to_string(), theme.negative()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
