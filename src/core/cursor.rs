//! Bounded playback position over a generated trace.

use thiserror::Error;

use super::step::Step;
use super::trace::Trace;

/// Errors from direct-index navigation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekError {
    #[error("step {index} is out of range (trace has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}

/// Current position within a trace.
///
/// Relative moves clamp at both ends and never fail. A `seek` outside the
/// trace is a caller bug and is reported instead of clamped.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    trace: Trace,
    index: usize,
}

impl PlaybackCursor {
    /// Start a cursor at the first step of `trace`
    pub fn new(trace: Trace) -> Self {
        Self { trace, index: 0 }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn current(&self) -> &Step {
        &self.trace.steps()[self.index]
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.trace.last_index()
    }

    /// Move forward one step, staying put on the last step
    pub fn advance(&mut self) -> &Step {
        if !self.at_end() {
            self.index += 1;
        }
        self.current()
    }

    /// Move back one step, staying put on the first step
    pub fn retreat(&mut self) -> &Step {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jump straight to `index`
    pub fn seek(&mut self, index: usize) -> Result<&Step, SeekError> {
        let len = self.trace.len();
        if index >= len {
            tracing::error!(index, len, "Seek outside trace bounds");
            return Err(SeekError::OutOfRange { index, len });
        }
        self.index = index;
        Ok(self.current())
    }

    /// Jump to the first step
    pub fn rewind(&mut self) -> &Step {
        self.index = 0;
        self.current()
    }

    /// Jump to the last step
    pub fn fast_forward(&mut self) -> &Step {
        self.index = self.trace.last_index();
        self.current()
    }
}
