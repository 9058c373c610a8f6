use uuid::Uuid;

use crate::core::{
    format_values, Command, Navigation, Outcome, SessionError, SessionOptions, SortSession,
    StepView,
};
use crate::ui::components::{LogViewState, StatusMessage, TextInputState};
use crate::ui::events::{InputMode, ViewMode};

/// Status shown in a tab with no sort in progress
pub const IDLE_PROMPT: &str = "Enter numbers and press Enter to start";

/// Inputs offered by the load-example key, in order
pub const EXAMPLE_INPUTS: [&str; 2] = ["1, 2, 3, 4", "5, 2, 8, 1"];

const TAB_NAME_WIDTH: usize = 18;

/// Represents a single sorting session (one tab)
#[derive(Debug, Clone)]
pub struct SortTab {
    /// Core session driven by this tab
    pub session: SortSession,
    /// Numbers being typed
    pub input: TextInputState,
    /// Step number typed at the go-to prompt
    pub goto: TextInputState,
    /// Full log view
    pub log_view: LogViewState,
    /// Message shown in the status bar
    pub status: Option<StatusMessage>,
    pub input_mode: InputMode,
    pub view_mode: ViewMode,
    /// Whether the tick timer advances the cursor
    pub autoplay: bool,
    /// Next entry of `EXAMPLE_INPUTS` to load
    next_example: usize,
}

impl SortTab {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            session: SortSession::new(options),
            input: TextInputState::new(),
            goto: TextInputState::new(),
            log_view: LogViewState::new(),
            status: Some(StatusMessage::info(IDLE_PROMPT)),
            input_mode: InputMode::Editing,
            view_mode: ViewMode::Steps,
            autoplay: false,
            next_example: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.session.id()
    }

    /// Short label for the tab bar: the input list, or "new" while empty
    pub fn tab_name(&self) -> String {
        let Some(trace) = self.session.trace() else {
            return "new".to_string();
        };
        let full = format_values(trace.input());
        if full.chars().count() <= TAB_NAME_WIDTH {
            full
        } else {
            let head: String = full.chars().take(TAB_NAME_WIDTH - 1).collect();
            format!("{head}…")
        }
    }

    pub fn current_view(&self) -> Option<StepView> {
        self.session.current_view()
    }

    fn show_view(&mut self, view: &StepView) {
        self.status = Some(StatusMessage::info(view.status()));
    }

    fn show_error(&mut self, error: &SessionError) {
        self.status = Some(StatusMessage::error(error.to_string()));
    }

    /// Sort whatever is in the input box
    pub fn start(&mut self) {
        let text = self.input.value().to_string();
        match self.session.apply(Command::Start(text)) {
            Ok(Outcome::Step(view)) => {
                self.show_view(&view);
                self.input_mode = InputMode::Playback;
                self.view_mode = ViewMode::Steps;
                self.autoplay = false;
                self.log_view.clear();
            }
            Ok(_) => {}
            Err(e) => self.show_error(&e),
        }
    }

    /// Put the next example list in the input box without starting it
    pub fn cycle_example(&mut self) {
        let example = EXAMPLE_INPUTS[self.next_example % EXAMPLE_INPUTS.len()];
        self.next_example = (self.next_example + 1) % EXAMPLE_INPUTS.len();
        self.input.set(example);
    }

    /// Move the cursor; returns false when the command was rejected
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        match self.session.apply(Command::Navigate(nav)) {
            Ok(Outcome::Step(view)) => {
                self.show_view(&view);
                true
            }
            Ok(_) => true,
            Err(e) => {
                self.show_error(&e);
                false
            }
        }
    }

    /// Jump to the step typed at the go-to prompt
    pub fn confirm_goto(&mut self) {
        let text = self.goto.value().trim().to_string();
        self.goto.clear();
        self.input_mode = InputMode::Playback;

        let total = self.session.trace().map(|t| t.len()).unwrap_or(0);
        match text.parse::<usize>() {
            Ok(index) if index < total => {
                self.navigate(Navigation::To(index));
            }
            _ => {
                self.status = Some(StatusMessage::error(format!(
                    "Step must be between 0 and {}",
                    total.saturating_sub(1)
                )));
            }
        }
    }

    /// Advance one step per autoplay tick, stopping at the last step
    pub fn tick(&mut self) {
        if !self.autoplay {
            return;
        }
        let at_end = self.session.cursor().map_or(true, |c| c.at_end());
        if at_end {
            self.autoplay = false;
            return;
        }
        if !self.navigate(Navigation::Forward) {
            self.autoplay = false;
        }
    }

    pub fn toggle_autoplay(&mut self) {
        if self.autoplay {
            self.autoplay = false;
            return;
        }
        let Some(cursor) = self.session.cursor() else {
            self.show_error(&SessionError::NoTrace);
            return;
        };
        if cursor.at_end() {
            self.navigate(Navigation::First);
        }
        self.autoplay = true;
    }

    /// Toggle between the array view and the full log
    pub fn show_all(&mut self) {
        if self.view_mode == ViewMode::Log {
            self.view_mode = ViewMode::Steps;
            return;
        }
        if let Ok(Outcome::Log(text)) = self.session.apply(Command::ShowAll) {
            self.log_view.set_text(&text);
            self.view_mode = ViewMode::Log;
            self.input_mode = InputMode::Playback;
            self.autoplay = false;
        }
    }

    /// Drop the trace and start over with an empty input box
    pub fn reset(&mut self) {
        if let Ok(Outcome::Cleared) = self.session.apply(Command::Reset) {
            self.input.clear();
            self.goto.clear();
            self.log_view.clear();
            self.status = Some(StatusMessage::info(IDLE_PROMPT));
            self.input_mode = InputMode::Editing;
            self.view_mode = ViewMode::Steps;
            self.autoplay = false;
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }
}
