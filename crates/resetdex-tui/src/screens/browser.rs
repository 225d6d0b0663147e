//! Browser screen: filter controls, card list, and the detail panel.
//!
//! The screen owns the `FilterState` and re-runs the filter after every
//! control change. The detail panel opens as a centered modal when the
//! terminal has room for it, otherwise inline below the list.

use std::cell::Cell;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap};
use tracing::{debug, info, warn};

use resetdex_core::view::Card;
use resetdex_core::{
    CardList, Catalog, CategorySelector, ChipGroup, DetailPanel, Device, FilterState,
    TagKind, filter,
};

use crate::action::{Action, Direction, Notification};
use crate::component::Component;
use crate::theme;
use crate::widgets::detail::render_detail;
use crate::widgets::{chips, overlay};

/// Smallest terminal that fits the modal overlay.
pub const MODAL_MIN_WIDTH: u16 = 60;
pub const MODAL_MIN_HEIGHT: u16 = 20;
/// Smallest terminal that fits the inline split.
pub const INLINE_MIN_WIDTH: u16 = 40;
pub const INLINE_MIN_HEIGHT: u16 = 12;
/// Below this height the filter control rows are hidden.
pub const CONTROLS_MIN_HEIGHT: u16 = 16;

const MODAL_WIDTH: u16 = 96;
const MODAL_HEIGHT: u16 = 32;
const PAGE: usize = 5;

/// How the detail panel is presented for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// Centered overlay that captures all input.
    Modal,
    /// Split below the card list; the list stays interactive.
    Inline,
    /// No room for either; the panel is not opened.
    Unavailable,
}

/// Pick the presentation for a `width` x `height` terminal.
pub fn detail_mode(prefer_modal: bool, width: u16, height: u16) -> DetailMode {
    if prefer_modal && width >= MODAL_MIN_WIDTH && height >= MODAL_MIN_HEIGHT {
        DetailMode::Modal
    } else if width >= INLINE_MIN_WIDTH && height >= INLINE_MIN_HEIGHT {
        DetailMode::Inline
    } else {
        DetailMode::Unavailable
    }
}

pub struct BrowserScreen {
    focused: bool,
    catalog: Catalog,
    filter: FilterState,
    category: CategorySelector,
    reset: ChipGroup,
    connectivity: ChipGroup,
    results: Vec<Arc<Device>>,
    cards: CardList,
    list_state: ListState,
    detail: Option<DetailPanel>,
    detail_mode: DetailMode,
    detail_scroll: u16,
    prefer_modal: bool,
    size: (u16, u16),
    controls_hidden: bool,
    /// Last drawn modal rect, for click-outside dismissal.
    modal_area: Cell<Option<Rect>>,
}

impl BrowserScreen {
    pub fn new(catalog: Catalog, prefer_modal: bool) -> Self {
        let category = CategorySelector::for_catalog(&catalog);
        let reset = ChipGroup::for_catalog(&catalog, TagKind::ResetMethod);
        let connectivity = ChipGroup::for_catalog(&catalog, TagKind::Connectivity);

        let mut screen = Self {
            focused: false,
            catalog,
            filter: FilterState::new(),
            category,
            reset,
            connectivity,
            results: Vec::new(),
            cards: CardList::default(),
            list_state: ListState::default(),
            detail: None,
            detail_mode: DetailMode::Unavailable,
            detail_scroll: 0,
            prefer_modal,
            size: (0, 0),
            controls_hidden: false,
            modal_area: Cell::new(None),
        };
        screen.refresh();
        screen
    }

    /// Write every control into the filter state, re-run the filter and
    /// rebuild the card list. Selection returns to the first card.
    fn refresh(&mut self) {
        self.category.apply(&mut self.filter);
        self.reset.apply(&mut self.filter);
        self.connectivity.apply(&mut self.filter);

        self.results = filter(&self.catalog, &self.filter);
        self.cards = CardList::build(&self.results);
        self.list_state
            .select(if self.cards.is_empty() { None } else { Some(0) });
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.cards.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(idx.min(len - 1)));
        }
    }

    fn move_down(&mut self, n: usize) {
        self.select(self.selected_index().saturating_add(n));
    }

    fn move_up(&mut self, n: usize) {
        self.select(self.selected_index().saturating_sub(n));
    }

    fn selected_card(&self) -> Option<&Card> {
        self.list_state.selected().and_then(|i| self.cards.get(i))
    }

    fn modal_open(&self) -> bool {
        self.detail.is_some() && self.detail_mode == DetailMode::Modal
    }

    fn controls_visible(&self) -> bool {
        self.size.1 >= CONTROLS_MIN_HEIGHT
    }

    /// Action for digit key `number` inside the detail panel.
    fn reference_action(&self, number: usize) -> Option<Action> {
        let panel = self.detail.as_ref()?;
        let action = match panel.reference(number) {
            None => Action::Notify(Notification::warning(format!("No reference {number}"))),
            Some(r) if !r.is_openable() => Action::Notify(Notification::warning(format!(
                "\"{}\" has no link to open",
                r.label
            ))),
            Some(r) => Action::OpenUrl(r.url.clone()),
        };
        Some(action)
    }

    fn open_detail(&mut self, device: &Arc<Device>) -> Option<Action> {
        let mode = detail_mode(self.prefer_modal, self.size.0, self.size.1);
        if mode == DetailMode::Unavailable {
            return Some(Action::Notify(Notification::warning(
                "Detail panel not available: terminal too small",
            )));
        }
        if mode == DetailMode::Inline && self.prefer_modal {
            warn!(
                width = self.size.0,
                height = self.size.1,
                "modal detail does not fit, using inline panel (degraded)"
            );
        }

        debug!(id = %device.id, ?mode, "opening detail");
        self.detail = Some(DetailPanel::for_device(device));
        self.detail_mode = mode;
        self.detail_scroll = 0;
        None
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.detail_scroll = 0;
        self.modal_area.set(None);
    }

    fn scroll_detail(&mut self, down: bool) {
        self.detail_scroll = if down {
            self.detail_scroll.saturating_add(1)
        } else {
            self.detail_scroll.saturating_sub(1)
        };
    }

    /// Re-evaluate layout-dependent state after a resize.
    fn resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.size = (width, height);

        let mut notice = None;
        if self.detail.is_some() {
            let mode = detail_mode(self.prefer_modal, width, height);
            match mode {
                DetailMode::Unavailable => {
                    self.close_detail();
                    notice = Some(Notification::warning(
                        "Detail panel closed: terminal too small",
                    ));
                }
                DetailMode::Inline if self.detail_mode == DetailMode::Modal => {
                    warn!(width, height, "modal detail no longer fits, switching inline (degraded)");
                }
                _ => {}
            }
            self.detail_mode = mode;
        }

        let hidden = !self.controls_visible();
        if hidden && !self.controls_hidden && notice.is_none() {
            notice = Some(Notification::warning(
                "Filter controls hidden: terminal too short",
            ));
        }
        self.controls_hidden = hidden;

        notice.map(Action::Notify)
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseDetail),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_detail(true);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_detail(false);
                None
            }
            KeyCode::Char('g') => {
                self.detail_scroll = 0;
                None
            }
            KeyCode::Char(c @ '1'..='9') => self.reference_action(digit(c)),
            _ => None,
        }
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            chips::render_category(&self.category),
            chips::render_chip_group("Reset method", 'r', &self.reset),
            chips::render_chip_group("Connectivity", 'n', &self.connectivity),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = self.cards.notice() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(notice, theme::empty_notice())),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = self.cards.cards().iter().map(card_item).collect();
        let list = List::new(items)
            .highlight_style(theme::card_selected())
            .highlight_symbol("▌ ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10)
        .and_then(|d| usize::try_from(d).ok())
        .unwrap_or(0)
}

/// Three lines per card plus a spacer: badge and model, summary,
/// connectivity.
fn card_item(card: &Card) -> ListItem<'static> {
    let mut header = Vec::with_capacity(3);
    if !card.badge.trim().is_empty() {
        header.push(Span::styled(format!(" {} ", card.badge), theme::badge()));
        header.push(Span::raw(" "));
    }
    header.push(Span::styled(card.title.clone(), theme::card_title()));

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(format!("  {}", card.summary), theme::card_text())),
        Line::from(vec![
            Span::styled("  Connectivity: ", theme::key_hint()),
            Span::styled(card.connectivity.clone(), theme::card_text()),
        ]),
        Line::from(""),
    ])
}

impl Component for BrowserScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.modal_open() {
            return Ok(self.handle_modal_key(key));
        }

        let inline_open = self.detail.is_some();
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_down(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_up(1);
                None
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_down(PAGE);
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_up(PAGE);
                None
            }
            KeyCode::PageDown => {
                self.move_down(PAGE);
                None
            }
            KeyCode::PageUp => {
                self.move_up(PAGE);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.select(0);
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select(usize::MAX);
                None
            }
            KeyCode::Enter => self
                .selected_card()
                .map(|card| Action::OpenDetail(card.activate())),
            KeyCode::Char('c') => Some(Action::CycleCategory(Direction::Next)),
            KeyCode::Char('C') => Some(Action::CycleCategory(Direction::Prev)),
            KeyCode::Char('r') => Some(Action::CycleChip(TagKind::ResetMethod, Direction::Next)),
            KeyCode::Char('R') => Some(Action::CycleChip(TagKind::ResetMethod, Direction::Prev)),
            KeyCode::Char('n') => Some(Action::CycleChip(TagKind::Connectivity, Direction::Next)),
            KeyCode::Char('N') => Some(Action::CycleChip(TagKind::Connectivity, Direction::Prev)),
            KeyCode::Char('x') => Some(Action::ClearFilters),

            // Inline panel keys
            KeyCode::Esc if inline_open => Some(Action::CloseDetail),
            KeyCode::Char('J') if inline_open => {
                self.scroll_detail(true);
                None
            }
            KeyCode::Char('K') if inline_open => {
                self.scroll_detail(false);
                None
            }
            KeyCode::Char(c @ '1'..='9') if inline_open => self.reference_action(digit(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modal_open() {
            let inside = self
                .modal_area
                .get()
                .is_some_and(|r| overlay::contains(r, mouse.column, mouse.row));
            return Ok(match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if !inside => Some(Action::CloseDetail),
                MouseEventKind::ScrollDown if inside => {
                    self.scroll_detail(true);
                    None
                }
                MouseEventKind::ScrollUp if inside => {
                    self.scroll_detail(false);
                    None
                }
                _ => None,
            });
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_down(1),
            MouseEventKind::ScrollUp => self.move_up(1),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Resize(w, h) => return Ok(self.resize(*w, *h)),
            Action::SearchInput(query) => {
                self.filter.set_query(query.as_str());
                self.refresh();
            }
            Action::CloseSearch => {
                self.filter.set_query("");
                self.refresh();
            }
            Action::CycleCategory(direction) => {
                match direction {
                    Direction::Next => self.category.next(),
                    Direction::Prev => self.category.prev(),
                }
                debug!(%direction, category = self.category.label(), "category changed");
                self.refresh();
            }
            Action::CycleChip(kind, direction) => {
                let group = match kind {
                    TagKind::ResetMethod => &mut self.reset,
                    TagKind::Connectivity => &mut self.connectivity,
                };
                let changed = match direction {
                    Direction::Next => group.next(),
                    Direction::Prev => group.prev(),
                };
                if changed {
                    debug!(%kind, %direction, tag = ?group.value(), "chip changed");
                    self.refresh();
                }
            }
            Action::ClearFilters => {
                self.filter.clear();
                self.category.select(None);
                self.reset.select(0);
                self.connectivity.select(0);
                self.refresh();
                info!("filters cleared");
            }
            Action::OpenDetail(device) => return Ok(self.open_detail(device)),
            Action::CloseDetail => self.close_detail(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Devices ({}/{}) ", self.results.len(), self.catalog.len());
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused && !self.modal_open() {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let controls_height = if self.controls_visible() { 4 } else { 0 };
        let layout = Layout::vertical([Constraint::Length(controls_height), Constraint::Min(1)])
            .split(inner);
        if controls_height > 0 {
            self.render_controls(frame, layout[0]);
        }

        let inline = self
            .detail
            .as_ref()
            .filter(|_| self.detail_mode == DetailMode::Inline);
        let (list_area, detail_area) = if inline.is_some() {
            let chunks =
                Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(layout[1]);
            (chunks[0], Some(chunks[1]))
        } else {
            (layout[1], None)
        };

        self.render_cards(frame, list_area);

        if let (Some(panel), Some(detail_area)) = (inline, detail_area) {
            render_detail(frame, detail_area, panel, self.detail_scroll, false);
        }

        match self.detail.as_ref() {
            Some(panel) if self.detail_mode == DetailMode::Modal => {
                let modal = overlay::centered(area, MODAL_WIDTH, MODAL_HEIGHT);
                overlay::clear(frame, modal);
                render_detail(frame, modal, panel, self.detail_scroll, true);
                self.modal_area.set(Some(modal));
            }
            _ => self.modal_area.set(None),
        }
    }

    fn captures_input(&self) -> bool {
        self.modal_open()
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "browser"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::action::NotificationLevel;
    use crate::widgets::detail::MAX_REFERENCE_KEY;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(prefer_modal: bool, width: u16, height: u16) -> BrowserScreen {
        let mut s = BrowserScreen::new(Catalog::builtin().unwrap(), prefer_modal);
        s.update(&Action::Resize(width, height)).unwrap();
        s
    }

    /// Feed a key and dispatch the resulting action back into the screen.
    fn press(s: &mut BrowserScreen, code: KeyCode) -> Option<Action> {
        let action = s.handle_key_event(key(code)).unwrap()?;
        match s.update(&action).unwrap() {
            Some(follow_up) => Some(follow_up),
            None => Some(action),
        }
    }

    fn screen_text(s: &BrowserScreen, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| s.render(f, f.area())).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn starts_with_whole_catalog_and_first_card_selected() {
        let s = screen(true, 120, 40);
        assert_eq!(s.cards.len(), s.catalog.len());
        assert_eq!(s.list_state.selected(), Some(0));
        assert!(s.filter.is_unfiltered());
    }

    #[test]
    fn detail_mode_depends_on_size_and_preference() {
        assert_eq!(detail_mode(true, 120, 40), DetailMode::Modal);
        assert_eq!(detail_mode(false, 120, 40), DetailMode::Inline);
        assert_eq!(detail_mode(true, 50, 14), DetailMode::Inline);
        assert_eq!(detail_mode(true, 30, 8), DetailMode::Unavailable);
    }

    #[test]
    fn search_narrows_to_single_router() {
        let mut s = screen(true, 120, 40);
        s.update(&Action::SearchInput("rt-ac".into())).unwrap();
        let ids: Vec<_> = s.cards.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["rt-ac1200"]);

        s.update(&Action::CloseSearch).unwrap();
        assert_eq!(s.cards.len(), s.catalog.len());
    }

    #[test]
    fn enter_opens_modal_that_captures_input() {
        let mut s = screen(true, 120, 40);
        let action = s.handle_key_event(key(KeyCode::Enter)).unwrap();
        let Some(Action::OpenDetail(device)) = &action else {
            panic!("expected OpenDetail, got {action:?}");
        };
        let in_catalog = s.catalog.get("rt-ac1200").unwrap();
        assert!(Arc::ptr_eq(device, &in_catalog));
        assert_eq!(s.update(&action.unwrap()).unwrap(), None);

        assert!(s.captures_input());
        let panel = s.detail.as_ref().unwrap();
        assert_eq!(panel.title, "RT-AC1200");
        assert_eq!(panel.sections[0].steps[0].number, 1);

        // list keys no longer move the selection
        press(&mut s, KeyCode::Char('j'));
        assert_eq!(s.list_state.selected(), Some(0));
        assert_eq!(s.detail_scroll, 1);
    }

    #[test]
    fn placeholder_reference_warns_instead_of_opening() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Enter);
        let action = press(&mut s, KeyCode::Char('1')).unwrap();
        let Action::Notify(n) = action else {
            panic!("expected a notification, got {action:?}");
        };
        assert_eq!(n.level, NotificationLevel::Warning);

        let missing = s.reference_action(MAX_REFERENCE_KEY).unwrap();
        assert!(matches!(missing, Action::Notify(_)));
    }

    #[test]
    fn escape_closes_and_reopen_replaces_content() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Esc);
        assert!(s.detail.is_none());
        assert!(!s.captures_input());

        press(&mut s, KeyCode::Char('j'));
        press(&mut s, KeyCode::Enter);
        let second = s.selected_card().unwrap().id.clone();
        assert_eq!(s.detail.as_ref().unwrap().device_id, second);
        assert_ne!(second.as_str(), "rt-ac1200");
    }

    #[test]
    fn inline_panel_keeps_list_interactive() {
        let mut s = screen(false, 120, 40);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.detail_mode, DetailMode::Inline);
        assert!(!s.captures_input());

        press(&mut s, KeyCode::Char('j'));
        assert_eq!(s.list_state.selected(), Some(1));
        press(&mut s, KeyCode::Enter);
        let selected = s.selected_card().unwrap().id.clone();
        assert_eq!(s.detail.as_ref().unwrap().device_id, selected);
    }

    #[test]
    fn tiny_terminal_refuses_detail_with_warning() {
        let mut s = screen(true, 30, 8);
        let action = press(&mut s, KeyCode::Enter).unwrap();
        assert!(matches!(
            action,
            Action::Notify(Notification {
                level: NotificationLevel::Warning,
                ..
            })
        ));
        assert!(s.detail.is_none());
    }

    #[test]
    fn shrinking_degrades_modal_to_inline_then_closes() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.detail_mode, DetailMode::Modal);

        s.update(&Action::Resize(50, 14)).unwrap();
        assert_eq!(s.detail_mode, DetailMode::Inline);
        assert!(s.detail.is_some());

        let notice = s.update(&Action::Resize(30, 8)).unwrap();
        assert!(matches!(notice, Some(Action::Notify(_))));
        assert!(s.detail.is_none());
    }

    #[test]
    fn short_terminal_hides_controls_once() {
        let mut s = screen(true, 120, 40);
        assert!(matches!(
            s.update(&Action::Resize(120, 14)).unwrap(),
            Some(Action::Notify(_))
        ));
        assert_eq!(s.update(&Action::Resize(100, 14)).unwrap(), None);
        assert!(!s.controls_visible());
    }

    #[test]
    fn chips_and_category_drive_the_filter() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Char('n'));
        let tag = s.connectivity.value().unwrap().to_owned();
        assert_eq!(s.filter.connectivity(), Some(tag.as_str()));
        assert!(
            s.cards
                .cards()
                .iter()
                .all(|c| s.catalog.get(c.id.as_str()).unwrap().connectivity.contains(&tag))
        );

        press(&mut s, KeyCode::Char('c'));
        assert_eq!(s.filter.category(), s.category.value());

        press(&mut s, KeyCode::Char('x'));
        assert!(s.filter.is_unfiltered());
        assert_eq!(s.connectivity.active_index(), 0);
        assert_eq!(s.category.value(), None);
        assert_eq!(s.cards.len(), s.catalog.len());
    }

    #[test]
    fn roteadores_with_poe_shows_the_notice() {
        let mut s = screen(true, 120, 40);
        s.category.select(Some("Roteadores"));
        s.connectivity.select_value(Some("poe"));
        s.refresh();
        assert!(s.cards.is_empty());
        assert_eq!(s.list_state.selected(), None);
        assert_eq!(press(&mut s, KeyCode::Enter), None);

        let text = screen_text(&s, 120, 40);
        assert!(text.contains("No results."));
        assert!(text.contains("Devices (0/"));
    }

    #[test]
    fn renders_modal_over_the_list() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Enter);
        let text = screen_text(&s, 120, 40);
        assert!(text.contains("RT-AC1200"));
        assert!(text.contains("Reset físico (botão)"));
        assert!(s.modal_area.get().is_some());
    }

    #[test]
    fn click_outside_modal_closes_it() {
        let mut s = screen(true, 120, 40);
        press(&mut s, KeyCode::Enter);
        let _ = screen_text(&s, 120, 40);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(s.handle_mouse_event(click).unwrap(), Some(Action::CloseDetail));
    }
}
