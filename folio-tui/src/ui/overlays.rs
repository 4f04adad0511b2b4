//! Overlay widgets - navigation menu, thank-you card, success toast.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use folio_core::Toast;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

const MENU_ITEMS: [(&str, &str); 4] = [
    ("Home", "back to the top"),
    ("Work", "selected projects"),
    ("Services", "what I can build"),
    ("Contact", "you are here"),
];

/// Drop-down menu under the navbar.
pub fn render_menu(f: &mut Frame, nav_area: Rect, body: Rect, theme: &Theme) {
    let width = 36u16.min(body.width);
    let height = (MENU_ITEMS.len() as u16 + 2).min(body.height);
    let popup = Rect {
        x: nav_area.x + nav_area.width.saturating_sub(width) / 2,
        y: body.y,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent())
        .title(" Menu [Esc] ")
        .title_style(theme.accent_bold())
        .style(theme.panel());

    let lines: Vec<Line> = MENU_ITEMS
        .iter()
        .map(|(item, hint)| {
            Line::from(vec![
                Span::styled(format!("{item:<10}"), theme.text()),
                Span::styled(*hint, theme.muted()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Card shown once the message has been sent.
pub fn render_thank_you(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.positive())
        .title(" Message sent ")
        .title_style(theme.positive())
        .style(theme.panel());

    let name = app.form.name.trim();
    let greeting = if name.is_empty() {
        "Thank you!".to_string()
    } else {
        format!("Thank you, {name}!")
    };
    let budget = app.site.budget.view(app.form.budget());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(greeting, theme.accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            app.site.submission.success_description.as_str(),
            theme.secondary(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Budget: ", theme.muted()),
            Span::styled(budget.formatted, theme.text()),
            Span::raw("  "),
            Span::styled(
                budget.classification.label,
                theme.token(&budget.classification.style_token),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("[Enter] send another message", theme.muted())),
    ];

    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Toast in the top-right corner of `area`.
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    let width = 48u16.min(area.width);
    let height = 4u16.min(area.height);
    let popup = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.positive())
        .style(theme.panel());

    let text = vec![
        Line::from(Span::styled(toast.title.as_str(), theme.positive())),
        Line::from(Span::styled(toast.description.as_str(), theme.muted())),
    ];
    f.render_widget(Paragraph::new(text).block(block), popup);
}
