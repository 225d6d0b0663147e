//! Detail panel rendering, shared by the modal overlay and the inline
//! fallback.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use resetdex_core::DetailPanel;
use resetdex_core::view::{NOTES_HEADING, REFERENCES_HEADING};

use crate::theme;

/// Highest reference number reachable with a single digit key.
pub const MAX_REFERENCE_KEY: usize = 9;

/// Body lines: meta, info chips, numbered steps, notes, references.
pub fn detail_lines(panel: &DetailPanel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(ref subtitle) = panel.subtitle {
        lines.push(Line::from(Span::styled(subtitle.clone(), theme::key_hint())));
    }

    if !panel.chips.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::with_capacity(panel.chips.len() * 2);
        for (i, chip) in panel.chips.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{chip}]"), theme::card_text()));
        }
        lines.push(Line::from(spans));
    }

    for section in &panel.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            theme::section_heading(),
        )));
        for step in &section.steps {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:>2}. ", step.number), theme::key_hint_key()),
                Span::styled(step.text.clone(), theme::card_text()),
            ]));
        }
    }

    if let Some(ref warning) = panel.warning {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⚠ {NOTES_HEADING}"),
            theme::warning().add_modifier(ratatui::style::Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(warning.clone(), theme::warning())));
    }

    if !panel.references.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            REFERENCES_HEADING,
            theme::section_heading(),
        )));
        for (i, reference) in panel.references.iter().enumerate() {
            let number = i + 1;
            let key = if number <= MAX_REFERENCE_KEY {
                format!(" [{number}] ")
            } else {
                "     ".to_owned()
            };
            let target = if reference.is_openable() {
                Span::styled(reference.url.clone(), theme::link())
            } else {
                Span::styled("(no link)", theme::key_hint())
            };
            lines.push(Line::from(vec![
                Span::styled(key, theme::key_hint_key()),
                Span::styled(format!("{}  ", reference.label), theme::card_text()),
                target,
            ]));
        }
    }

    lines
}

/// Draw the panel inside a bordered block with a close hint footer.
pub fn render_detail(frame: &mut Frame, area: Rect, panel: &DetailPanel, scroll: u16, modal: bool) {
    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if modal {
            theme::border_focused()
        } else {
            theme::border_default()
        })
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let body = Paragraph::new(detail_lines(panel))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, layout[0]);

    let mut hints = vec![
        Span::styled("  Esc ", theme::key_hint_key()),
        Span::styled("close  ", theme::key_hint()),
        Span::styled(if modal { "j/k " } else { "J/K " }, theme::key_hint_key()),
        Span::styled("scroll", theme::key_hint()),
    ];
    if !panel.references.is_empty() {
        hints.push(Span::styled("  1-9 ", theme::key_hint_key()));
        hints.push(Span::styled("open link", theme::key_hint()));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), layout[1]);
}
