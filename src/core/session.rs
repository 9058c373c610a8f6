//! Explicit per-session state: the Empty/Active machine behind every front-end.

use thiserror::Error;
use uuid::Uuid;

use super::cursor::{PlaybackCursor, SeekError};
use super::input::{parse_numbers_limited, InputError};
use super::report::{render_log, NO_SORT_IN_PROGRESS};
use super::step::Step;
use super::trace::{generate_with, Trace, TraceOptions};

/// Direction or target of a navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Forward,
    Backward,
    First,
    Last,
    To(usize),
}

/// User-triggered commands accepted by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the text and, if valid, sort it into a fresh trace
    Start(String),
    Navigate(Navigation),
    /// Produce the full plain-text log of the current trace
    ShowAll,
    /// Discard the trace and return to the empty state
    Reset,
}

/// What a front-end should display after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Step(StepView),
    Log(String),
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Error: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Seek(#[from] SeekError),
    #[error("No sorting in progress")]
    NoTrace,
}

/// A step together with its position, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub step: Step,
    pub position: usize,
    pub total: usize,
    pub can_retreat: bool,
    pub can_advance: bool,
}

impl StepView {
    fn from_cursor(cursor: &PlaybackCursor) -> Self {
        Self {
            step: cursor.current().clone(),
            position: cursor.position(),
            total: cursor.len(),
            can_retreat: !cursor.at_start(),
            can_advance: !cursor.at_end(),
        }
    }

    /// Status line such as `Step 3 of 8: Pass 1: No swap`
    pub fn status(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.step.sequence_number,
            self.total.saturating_sub(1),
            self.step.description
        )
    }
}

/// Options fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub trace: TraceOptions,
    /// Upper bound on how many numbers a single sort accepts
    pub max_values: Option<usize>,
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Empty,
    Active(PlaybackCursor),
}

/// One independent visualizer session.
///
/// Each session owns its trace and cursor outright, so any number of them
/// can coexist (one per UI tab, one per test) without interfering.
#[derive(Debug, Clone)]
pub struct SortSession {
    id: Uuid,
    options: SessionOptions,
    state: SessionState,
}

impl SortSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            options,
            state: SessionState::Empty,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn cursor(&self) -> Option<&PlaybackCursor> {
        match &self.state {
            SessionState::Active(cursor) => Some(cursor),
            SessionState::Empty => None,
        }
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.cursor().map(PlaybackCursor::trace)
    }

    /// View of the current step, if a trace exists
    pub fn current_view(&self) -> Option<StepView> {
        self.cursor().map(StepView::from_cursor)
    }

    /// Handle one command to completion.
    ///
    /// A rejected `Start` leaves any existing trace in place.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Start(text) => self.start(&text),
            Command::Navigate(nav) => self.navigate(nav),
            Command::ShowAll => Ok(Outcome::Log(
                self.trace()
                    .map(render_log)
                    .unwrap_or_else(|| NO_SORT_IN_PROGRESS.to_string()),
            )),
            Command::Reset => {
                self.state = SessionState::Empty;
                tracing::info!(session = %self.id, "Session reset");
                Ok(Outcome::Cleared)
            }
        }
    }

    fn start(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let values = parse_numbers_limited(text, self.options.max_values).map_err(|e| {
            tracing::debug!(session = %self.id, error = %e, "Rejected sort input");
            e
        })?;

        let trace = generate_with(&values, self.options.trace);
        tracing::info!(
            session = %self.id,
            values = values.len(),
            steps = trace.len(),
            "Started sort"
        );

        let cursor = PlaybackCursor::new(trace);
        let view = StepView::from_cursor(&cursor);
        self.state = SessionState::Active(cursor);
        Ok(Outcome::Step(view))
    }

    fn navigate(&mut self, nav: Navigation) -> Result<Outcome, SessionError> {
        let SessionState::Active(cursor) = &mut self.state else {
            return Err(SessionError::NoTrace);
        };

        let from = cursor.position();
        match nav {
            Navigation::Forward => {
                cursor.advance();
            }
            Navigation::Backward => {
                cursor.retreat();
            }
            Navigation::First => {
                cursor.rewind();
            }
            Navigation::Last => {
                cursor.fast_forward();
            }
            Navigation::To(index) => {
                cursor.seek(index)?;
            }
        }
        tracing::debug!(session = %self.id, ?nav, from, to = cursor.position(), "Navigate");

        Ok(Outcome::Step(StepView::from_cursor(cursor)))
    }
}

impl Default for SortSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
