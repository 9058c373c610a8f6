use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::config::{Config, KeyCombo, KeyContext, MIN_AUTOPLAY_INTERVAL_MS};
use crate::core::Navigation;
use crate::ui::action::Action;
use crate::ui::components::{
    theme::{ACCENT_PRIMARY, BORDER_DEFAULT, BORDER_FOCUSED, TEXT_MUTED, TEXT_PRIMARY},
    ArrayView, GlobalFooter, ProgressBar, StatusBar, StatusMessage, TabBar,
};
use crate::ui::events::{AppEvent, InputMode, ViewMode};
use crate::ui::session::SortTab;
use crate::ui::tab_manager::TabManager;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// Tab manager for multiple sessions
    tab_manager: TabManager,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut tab_manager = TabManager::new(config.max_tabs, config.session_options());
        // Always start with one tab
        tab_manager.new_tab();

        Self {
            config,
            should_quit: false,
            tab_manager,
        }
    }

    /// Type `text` into the active tab and start sorting it
    pub fn start_with(&mut self, text: &str) {
        if let Some(tab) = self.tab_manager.active_tab_mut() {
            tab.input.set(text);
            tab.start();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tab_manager(&self) -> &TabManager {
        &self.tab_manager
    }

    pub fn active_tab(&self) -> Option<&SortTab> {
        self.tab_manager.active_tab()
    }

    /// Input mode of the active tab
    pub fn input_mode(&self) -> InputMode {
        self.active_tab().map(|t| t.input_mode).unwrap_or_default()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.active_tab().map(|t| t.view_mode).unwrap_or_default()
    }

    fn tick_period(&self) -> Duration {
        Duration::from_millis(
            self.config
                .playback
                .autoplay_interval_ms
                .max(MIN_AUTOPLAY_INTERVAL_MS),
        )
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();
        execute!(io::stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.tick_period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            let event = tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => AppEvent::Input(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => AppEvent::Quit,
                },
                _ = ticker.tick() => AppEvent::Tick,
            };

            self.handle_event(event);
        }

        Ok(())
    }

    /// Apply one event to completion
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
            }
            AppEvent::Input(Event::Paste(text)) => self.handle_paste(&text),
            AppEvent::Input(_) => {}
            AppEvent::Tick => {
                for tab in self.tab_manager.tabs_mut() {
                    tab.tick();
                }
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let combo = KeyCombo::from_key_event(&key);
        let context = KeyContext::from_input_mode(self.input_mode(), self.view_mode());

        if let Some(action) = self.config.keybindings.get_action(&combo, context) {
            self.execute_action(action);
            return;
        }

        let crossterm::event::KeyCode::Char(c) = key.code else {
            return;
        };
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        let Some(tab) = self.tab_manager.active_tab_mut() else {
            return;
        };
        match tab.input_mode {
            InputMode::Editing => tab.input.insert_char(c),
            InputMode::GoTo if c.is_ascii_digit() => tab.goto.insert_char(c),
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let Some(tab) = self.tab_manager.active_tab_mut() else {
            return;
        };
        if tab.input_mode == InputMode::Editing {
            for c in text.chars().filter(|c| !c.is_control()) {
                tab.input.insert_char(c);
            }
        }
    }

    /// Execute a bound action against the app or the active tab
    pub fn execute_action(&mut self, action: Action) {
        tracing::trace!(action = action.description(), "Executing action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewTab => {
                if self.tab_manager.new_tab().is_none() {
                    let max = self.config.max_tabs;
                    if let Some(tab) = self.tab_manager.active_tab_mut() {
                        tab.status = Some(StatusMessage::error(format!(
                            "Maximum of {max} tabs reached"
                        )));
                    }
                }
            }
            Action::CloseTab => {
                let index = self.tab_manager.active_index();
                self.tab_manager.close_tab(index);
                if self.tab_manager.is_empty() {
                    self.tab_manager.new_tab();
                }
            }
            Action::NextTab => self.tab_manager.next_tab(),
            Action::PrevTab => self.tab_manager.prev_tab(),
            other => {
                if let Some(tab) = self.tab_manager.active_tab_mut() {
                    apply_tab_action(tab, other);
                }
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Length(3), // Input box
                Constraint::Min(6),    // Array / log view
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Footer
            ])
            .split(f.area());

        TabBar::new(
            self.tab_manager.tab_names(),
            self.tab_manager.active_index(),
            self.tab_manager.can_add_tab(),
        )
        .render(chunks[0], f.buffer_mut());

        let input_mode = self.input_mode();
        let view_mode = self.view_mode();
        let mut footer = GlobalFooter::from_state(view_mode, input_mode);

        if let Some(tab) = self.tab_manager.active_tab_mut() {
            draw_input(tab, f, chunks[1]);

            match view_mode {
                ViewMode::Log => tab.log_view.render(chunks[2], f.buffer_mut()),
                ViewMode::Steps => draw_steps(tab, f, chunks[2]),
            }

            if let Some(view) = tab.current_view() {
                ProgressBar::new(view.position, view.total).render(chunks[3], f.buffer_mut());
                footer = footer.with_step_bounds(view.can_retreat, view.can_advance);
            }

            if tab.input_mode == InputMode::GoTo {
                draw_goto_prompt(tab, f, chunks[4]);
            } else {
                let right = if tab.is_autoplaying() { "▶ autoplay" } else { "" };
                StatusBar::new(tab.status.as_ref(), right).render(chunks[4], f.buffer_mut());
            }
        }

        footer.render(chunks[5], f.buffer_mut());
    }
}

fn apply_tab_action(tab: &mut SortTab, action: Action) {
    match action {
        Action::StartSort => tab.start(),
        Action::FocusInput => {
            tab.autoplay = false;
            tab.view_mode = ViewMode::Steps;
            tab.input_mode = InputMode::Editing;
        }
        Action::LeaveInput => {
            if tab.session.is_active() {
                tab.input_mode = InputMode::Playback;
            }
        }
        Action::Backspace => match tab.input_mode {
            InputMode::GoTo => tab.goto.delete_char(),
            _ => tab.input.delete_char(),
        },
        Action::Delete => tab.input.delete_forward(),
        Action::DeleteWordBack => tab.input.delete_word(),
        Action::DeleteToStart => tab.input.delete_to_start(),
        Action::MoveCursorLeft => tab.input.move_left(),
        Action::MoveCursorRight => tab.input.move_right(),
        Action::MoveCursorStart => tab.input.move_start(),
        Action::MoveCursorEnd => tab.input.move_end(),
        Action::CycleExample => tab.cycle_example(),

        Action::StepForward | Action::StepBackward | Action::JumpToStart | Action::JumpToEnd => {
            tab.autoplay = false;
            let nav = match action {
                Action::StepForward => Navigation::Forward,
                Action::StepBackward => Navigation::Backward,
                Action::JumpToStart => Navigation::First,
                _ => Navigation::Last,
            };
            tab.navigate(nav);
        }
        Action::ToggleAutoplay => tab.toggle_autoplay(),
        Action::ShowAll => tab.show_all(),
        Action::Reset => tab.reset(),

        Action::OpenGoTo => {
            if tab.session.is_active() {
                tab.autoplay = false;
                tab.goto.clear();
                tab.input_mode = InputMode::GoTo;
            } else {
                tab.status = Some(StatusMessage::error(crate::core::NO_SORT_IN_PROGRESS));
            }
        }
        Action::ConfirmGoTo => tab.confirm_goto(),
        Action::Cancel => {
            tab.goto.clear();
            tab.input_mode = InputMode::Playback;
        }

        Action::ScrollUp(n) => tab.log_view.scroll_up(n as usize),
        Action::ScrollDown(n) => tab.log_view.scroll_down(n as usize),
        Action::ScrollPageUp => tab.log_view.page_up(),
        Action::ScrollPageDown => tab.log_view.page_down(),
        Action::ScrollToTop => tab.log_view.scroll_to_top(),
        Action::ScrollToBottom => tab.log_view.scroll_to_bottom(),

        Action::Quit | Action::NewTab | Action::CloseTab | Action::NextTab | Action::PrevTab => {}
    }
}

fn draw_input(tab: &SortTab, f: &mut Frame, area: Rect) {
    let focused = tab.input_mode == InputMode::Editing;
    let block = Block::default()
        .title(" Numbers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);
    tab.input.render(
        inner,
        f.buffer_mut(),
        Style::default().fg(TEXT_PRIMARY),
        Some(("e.g. 5, 2, 8, 1, 9", Style::default().fg(TEXT_MUTED))),
        focused,
    );
}

fn draw_steps(tab: &SortTab, f: &mut Frame, area: Rect) {
    let title = match (tab.current_view(), tab.session.trace()) {
        (Some(view), Some(trace)) if !view.can_advance => {
            let stats = trace.stats();
            format!(
                " Step {} of {} · {} comparisons, {} swaps, {} passes ",
                view.position,
                view.total.saturating_sub(1),
                stats.comparisons,
                stats.swaps,
                stats.passes
            )
        }
        (Some(view), _) => format!(" Step {} of {} ", view.position, view.total.saturating_sub(1)),
        _ => " Bubble sort ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_DEFAULT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let view = tab.current_view();
    ArrayView::new(view.as_ref().map(|v| &v.step)).render(inner, f.buffer_mut());
}

fn draw_goto_prompt(tab: &SortTab, f: &mut Frame, area: Rect) {
    let last = tab
        .session
        .trace()
        .map(|t| t.last_index())
        .unwrap_or_default();
    let prompt = format!(" Go to step (0-{last}): ");
    let width = prompt.chars().count() as u16;

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            prompt,
            Style::default().fg(ACCENT_PRIMARY),
        ))),
        area,
    );
    let input_area = Rect::new(
        area.x + width.min(area.width),
        area.y,
        area.width.saturating_sub(width),
        1,
    );
    tab.goto.render(
        input_area,
        f.buffer_mut(),
        Style::default().fg(TEXT_PRIMARY),
        None,
        true,
    );
}
