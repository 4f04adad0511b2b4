//! Budget slider: amount, tier label, fill gauge and the tier legend.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, LineGauge, Paragraph};
use ratatui::Frame;

use folio_core::{BudgetSlider, SliderState};

use crate::theme::Theme;

/// Rows needed by the slider block.
pub const HEIGHT: u16 = 6;

pub fn render(
    f: &mut Frame,
    area: Rect,
    slider: &BudgetSlider,
    state: &SliderState,
    focused: bool,
    theme: &Theme,
) {
    let view = slider.view(state);
    let tier_style = theme.token(&view.classification.style_token);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused))
        .title(" Budget ")
        .title_style(theme.field_border(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Line::from(vec![
        Span::styled(view.formatted.clone(), theme.text().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            view.classification.label.clone(),
            tier_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if focused { "   [←/→] adjust" } else { "" },
            theme.muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    let gauge = LineGauge::default()
        .ratio(view.fill)
        .label("")
        .line_set(symbols::line::THICK)
        .filled_style(tier_style)
        .unfilled_style(theme.muted());
    f.render_widget(gauge, rows[1]);

    let (low, high) = slider.range_labels();
    let pad = (rows[2].width as usize).saturating_sub(low.chars().count() + high.chars().count());
    let range_line = Line::from(vec![
        Span::styled(low, theme.muted()),
        Span::raw(" ".repeat(pad)),
        Span::styled(high, theme.muted()),
    ]);
    f.render_widget(Paragraph::new(range_line), rows[2]);

    let mut chips: Vec<Span> = Vec::new();
    for chip in slider.chips(state) {
        let style = if chip.active {
            theme
                .token(&chip.style_token)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            theme.token(&chip.style_token)
        };
        chips.push(Span::styled(format!(" {} ", chip.range_label), style));
        chips.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(chips)), rows[3]);
}
