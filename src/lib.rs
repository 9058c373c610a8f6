pub mod config;
pub mod core;
pub mod ui;
pub mod util;

pub use config::Config;
pub use crate::core::{
    generate, generate_with, parse_numbers, render_json, render_log, Command, InputError,
    Navigation, Outcome, PlaybackCursor, SessionError, SessionOptions, SortSession, Step,
    StepKind, Trace, TraceOptions,
};
pub use ui::App;
