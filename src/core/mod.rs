//! Sorting core: input validation, trace generation, playback and sessions.
//!
//! Everything in here is synchronous and free of terminal concerns so that
//! any driver (the TUI, the `log` subcommand, tests) can use it directly.

pub mod cursor;
pub mod input;
pub mod report;
pub mod session;
pub mod step;
pub mod trace;

pub use cursor::{PlaybackCursor, SeekError};
pub use input::{parse_numbers, parse_numbers_limited, InputError};
pub use report::{render_json, render_log, NO_SORT_IN_PROGRESS};
pub use session::{
    Command, Navigation, Outcome, SessionError, SessionOptions, SortSession, StepView,
};
pub use step::{format_value, format_values, ElementRole, Step, StepKind};
pub use trace::{generate, generate_with, Trace, TraceOptions, TraceStats};
