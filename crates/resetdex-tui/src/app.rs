//! Application core: event loop, search input, overlays, action dispatch.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tui_input::{Input, InputRequest};

use resetdex_config::TuiSettings;
use resetdex_core::Catalog;

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader, Rates};
use crate::screens::browser::BrowserScreen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::overlay;

const TOAST_TTL: Duration = Duration::from_secs(3);

/// Top-level application state and event loop.
pub struct App {
    screen: Box<dyn Component>,
    running: bool,
    help_visible: bool,
    search_active: bool,
    search: Input,
    settings: TuiSettings,
    /// Action sender; the loop and components queue actions through it.
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Active toast with display timestamp.
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(catalog: Catalog, settings: TuiSettings) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screen = BrowserScreen::new(catalog, settings.modal);

        Self {
            screen: Box::new(screen),
            running: true,
            help_visible: false,
            search_active: false,
            search: Input::default(),
            settings,
            action_tx,
            action_rx,
            notification: None,
        }
    }

    /// Run the main event loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let (width, height) = tui.size().unwrap_or((80, 24));

        self.screen.init(self.action_tx.clone())?;
        self.screen.set_focused(true);
        self.action_tx.send(Action::Resize(width, height))?;

        let mut events = EventReader::spawn(Rates::from_millis(
            self.settings.tick_rate_ms,
            self.settings.render_rate_ms,
        ));

        info!(screen = self.screen.id(), "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if action == Action::Render {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key to an action. Overlays and the search box take keys
    /// first, then global bindings, then the screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.search_active {
            return Ok(self.handle_search_key(key));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        // A modal surface on the screen gets every key.
        if self.screen.captures_input() {
            return self.screen.handle_key_event(key);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                return Ok(Some(Action::ToggleHelp));
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),
            _ => {}
        }

        self.screen.handle_key_event(key)
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        let request = match key.code {
            KeyCode::Esc => return Some(Action::CloseSearch),
            KeyCode::Enter => return Some(Action::SearchSubmit),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputRequest::DeleteLine
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputRequest::DeletePrevWord
            }
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return None,
        };

        let changed = self.search.handle(request)?;
        changed
            .value
            .then(|| Action::SearchInput(self.search.value().to_owned()))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.help_visible || self.search_active {
            return Ok(None);
        }
        self.screen.handle_mouse_event(mouse)
    }

    /// Update app state and forward to the screen. Follow-up actions are
    /// queued, not processed recursively.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Render => {}
            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, shown)| shown.elapsed() > TOAST_TTL)
                {
                    self.notification = None;
                }
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::OpenSearch => self.search_active = true,
            Action::SearchSubmit => {
                self.search_active = false;
                debug!(query = self.search.value(), "search submitted");
            }
            Action::OpenUrl(url) => {
                let notice = match open::that_detached(url) {
                    Ok(()) => {
                        info!(%url, "opened reference");
                        Notification::success("Opened in browser")
                    }
                    Err(e) => {
                        warn!(%url, error = %e, "failed to open reference");
                        Notification::error(format!("Could not open link: {e}"))
                    }
                };
                self.action_tx.send(Action::Notify(notice))?;
            }
            Action::Notify(n) => {
                debug!(level = ?n.level, message = %n.message, "notification");
                self.notification = Some((n.clone(), Instant::now()));
            }
            other => {
                match other {
                    Action::CloseSearch => {
                        self.search_active = false;
                        self.search.reset();
                    }
                    Action::ClearFilters => {
                        self.search.reset();
                        self.action_tx
                            .send(Action::Notify(Notification::info("Filters cleared")))?;
                    }
                    _ => {}
                }
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        self.screen.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        if let Some((ref notif, _)) = self.notification {
            render_notification(frame, area, notif);
        }

        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let prompt = " / ";
            let line = Line::from(vec![
                Span::styled(prompt, Style::default().fg(theme::ELECTRIC_PURPLE)),
                Span::styled(
                    self.search.value().to_owned(),
                    Style::default().fg(theme::NEON_CYAN),
                ),
                Span::styled("  Esc clear  Enter done", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);

            let offset = u16::try_from(self.search.visual_cursor()).unwrap_or(u16::MAX);
            let prompt_width = u16::try_from(prompt.len()).unwrap_or(0);
            frame.set_cursor_position((
                area.x.saturating_add(prompt_width).saturating_add(offset),
                area.y,
            ));
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if !self.search.value().trim().is_empty() {
            spans.push(Span::styled("/", Style::default().fg(theme::ELECTRIC_PURPLE)));
            spans.push(Span::styled(
                self.search.value().to_owned(),
                Style::default().fg(theme::NEON_CYAN),
            ));
            spans.push(Span::styled(" │ ", theme::key_hint()));
        }
        for (key, label) in [
            ("/", "search"),
            ("c", "category"),
            ("r", "reset"),
            ("n", "connectivity"),
            ("x", "clear"),
            ("?", "help"),
            ("q", "quit"),
        ] {
            spans.push(Span::styled(format!("{key} "), theme::key_hint_key()));
            spans.push(Span::styled(format!("{label}  "), theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn help_row(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
        Span::styled(label, theme::key_hint()),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = overlay::centered(area, 56, 24);
    overlay::clear(frame, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme::NEON_CYAN)))
    };

    let help_text = vec![
        Line::from(""),
        heading("  Browse"),
        help_row("j/k ↑/↓", "Move up/down"),
        help_row("g/G", "Top / bottom"),
        help_row("Ctrl+d/u", "Page down / up"),
        help_row("Enter", "Open details"),
        Line::from(""),
        heading("  Filters"),
        help_row("/", "Search model, category, summary"),
        help_row("c/C", "Next / previous category"),
        help_row("r/R", "Cycle reset method"),
        help_row("n/N", "Cycle connectivity"),
        help_row("x", "Clear all filters"),
        Line::from(""),
        heading("  Details"),
        help_row("Esc", "Close"),
        help_row("1-9", "Open reference link"),
        help_row("j/k", "Scroll (J/K when inline)"),
        Line::from(""),
        help_row("?", "This help"),
        help_row("q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}

/// Toast in the bottom-right corner, above the status bar.
fn render_notification(frame: &mut Frame, area: Rect, notif: &Notification) {
    let msg_len = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    let width = msg_len
        .saturating_add(6)
        .clamp(20, 60)
        .min(area.width.saturating_sub(2));
    let height = 3u16;

    let x = area.width.saturating_sub(width + 1);
    let y = area.height.saturating_sub(height + 2);
    let toast_area = Rect::new(area.x + x, area.y + y, width, height).intersection(area);

    let (border_color, icon) = match notif.level {
        NotificationLevel::Success => (theme::SUCCESS_GREEN, "✓"),
        NotificationLevel::Error => (theme::ERROR_RED, "✗"),
        NotificationLevel::Warning => (theme::ELECTRIC_YELLOW, "!"),
        NotificationLevel::Info => (theme::NEON_CYAN, "·"),
    };

    overlay::clear(frame, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
        Span::styled(notif.message.clone(), Style::default().fg(theme::DIM_WHITE)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
