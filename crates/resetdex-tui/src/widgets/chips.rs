//! Single-line renderings of the filter controls: a labelled chip group
//! and the category selector.

use ratatui::text::{Line, Span};

use resetdex_core::{CategorySelector, ChipGroup};

use crate::theme;

/// `label  [Active]  Other  Other` with the active chip highlighted.
pub fn render_chip_group(label: &str, key: char, group: &ChipGroup) -> Line<'static> {
    let mut spans = Vec::with_capacity(group.chips().len() * 2 + 2);
    spans.push(Span::styled(format!(" {key} "), theme::key_hint_key()));
    spans.push(Span::styled(format!("{label:<13}"), theme::key_hint()));

    for (i, chip) in group.chips().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }
        if i == group.active_index() {
            spans.push(Span::styled(format!("[{}]", chip.label), theme::chip_active()));
        } else {
            spans.push(Span::styled(chip.label.clone(), theme::chip_inactive()));
        }
    }

    Line::from(spans)
}

/// `c Category      ‹ Roteadores ›`
pub fn render_category(selector: &CategorySelector) -> Line<'static> {
    let active = if selector.value().is_some() {
        theme::chip_active()
    } else {
        theme::chip_inactive()
    };
    Line::from(vec![
        Span::styled(" c ", theme::key_hint_key()),
        Span::styled(format!("{:<13}", "Category"), theme::key_hint()),
        Span::styled("‹ ", theme::key_hint()),
        Span::styled(selector.label().to_owned(), active),
        Span::styled(" ›", theme::key_hint()),
    ])
}
