use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::{App, Pane};

use super::helpers::term_color;

const CHIP: &str = "██";

/// Builds the saved-palette list: one row per palette with its save date and
/// a chip per color, oldest first.
pub fn build_saved_text(app: &App) -> Text<'_> {
    let theme = app.theme;
    if app.saved.is_empty() {
        return Text::from(Span::styled(
            "No saved palettes yet.",
            Style::default().fg(theme.dim()),
        ));
    }

    let lines = app
        .saved
        .iter()
        .enumerate()
        .map(|(index, palette)| {
            let selected = index == app.selected_saved_index && app.pane == Pane::Saved;
            let marker_style = if selected {
                Style::default()
                    .fg(theme.highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim())
            };
            let date_style = if selected {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text())
            };

            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(format!("{:<10}", palette.created_on), date_style),
                Span::raw(" "),
            ];
            for color in &palette.colors {
                let chip_style = match term_color(color) {
                    Some(rgb) => Style::default().fg(rgb),
                    None => Style::default().fg(theme.dim()),
                };
                spans.push(Span::styled(CHIP, chip_style));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {}", palette.id),
                Style::default().fg(theme.dim()),
            ));
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
