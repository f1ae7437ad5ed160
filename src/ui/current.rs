use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::{App, Pane};

use super::helpers::term_color;

const SWATCH: &str = "████████";

/// Builds the working-palette strip: a row of swatches with the hex code of
/// each color underneath and a marker on the selected one.
pub fn build_current_text(app: &App) -> Text<'_> {
    let theme = app.theme;
    if app.session.is_empty() {
        return Text::from(Span::styled(
            "Press 'g' to generate a palette.",
            Style::default().fg(theme.dim()),
        ));
    }

    let mut swatch_spans = Vec::new();
    let mut code_spans = Vec::new();
    for (index, color) in app.session.colors().iter().enumerate() {
        let selected = index == app.selected_color_index && app.pane == Pane::Current;
        let swatch_style = match term_color(color) {
            Some(rgb) => Style::default().fg(rgb),
            None => Style::default().fg(theme.dim()),
        };
        swatch_spans.push(Span::raw("  "));
        swatch_spans.push(Span::styled(SWATCH, swatch_style));

        let code_style = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        code_spans.push(Span::styled(
            if selected { " >" } else { "  " },
            Style::default().fg(theme.highlight()),
        ));
        code_spans.push(Span::styled(format!("{:<8}", color.as_str()), code_style));
    }

    Text::from(vec![
        Line::from(swatch_spans.clone()),
        Line::from(swatch_spans),
        Line::from(code_spans),
    ])
}
