//! Geometry helpers for floating surfaces.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};

use crate::theme;

/// A `width` x `height` rect centered in `area`, shrunk to fit with a
/// two-cell margin.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Wipe what is under a floating surface and paint its background.
pub fn clear(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_DARK)), area);
}

/// Whether `(column, row)` lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered(area, 60, 20);
        assert_eq!(r, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn oversized_rect_is_clamped() {
        let area = Rect::new(0, 0, 30, 10);
        let r = centered(area, 60, 20);
        assert_eq!(r.width, 26);
        assert_eq!(r.height, 8);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(5, 5, 10, 4);
        assert!(contains(r, 5, 5));
        assert!(contains(r, 14, 8));
        assert!(!contains(r, 15, 8));
        assert!(!contains(r, 4, 6));
    }
}
