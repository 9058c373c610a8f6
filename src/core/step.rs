//! Step records captured while sorting.

use serde::{Deserialize, Serialize};

/// What a recorded step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The untouched input, before any pass
    Initial,
    /// Two adjacent elements are about to be compared
    Compare,
    /// The compared pair was out of order and has been swapped
    Swap,
    /// The compared pair was already in order
    NoSwap,
    /// A whole pass finished without swapping, so sorting stops early
    SortedEarly,
    /// Final state, always the last step of a trace
    Complete,
}

impl StepKind {
    /// Whether steps of this kind carry a compared pair
    pub fn has_comparison(self) -> bool {
        matches!(self, StepKind::Compare | StepKind::Swap | StepKind::NoSwap)
    }
}

/// Role an array element plays in a step, used for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Element was just moved by a swap
    Swapped,
    /// Element is part of the pair under comparison
    Comparing,
    /// Element is not involved in the current step
    Idle,
}

/// One snapshot of the array during a bubble sort run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Position of the step within its trace, starting at 0
    pub sequence_number: usize,
    pub kind: StepKind,
    /// 1-based pass number, absent for the initial and complete steps
    pub pass: Option<usize>,
    /// Full copy of the array at this point
    pub array_state: Vec<f64>,
    /// Adjacent pair `(j, j + 1)` under comparison
    pub compared_indices: Option<(usize, usize)>,
    /// True only for the post-swap snapshot
    pub did_swap: bool,
    pub description: String,
}

impl Step {
    /// Whether `index` is one of the compared positions
    pub fn is_compared(&self, index: usize) -> bool {
        self.compared_indices
            .is_some_and(|(left, right)| index == left || index == right)
    }

    /// Highlight role of the element at `index`
    pub fn role_of(&self, index: usize) -> ElementRole {
        if !self.is_compared(index) {
            ElementRole::Idle
        } else if self.did_swap {
            ElementRole::Swapped
        } else {
            ElementRole::Comparing
        }
    }
}

/// Format a value the way users typed it: integral values without a
/// fractional part, everything else in shortest round-trip form.
pub fn format_value(value: f64) -> String {
    // -0 prints as 0
    let value = if value == 0.0 { 0.0 } else { value };
    // f64's Display already drops ".0" for integral values
    format!("{}", value)
}

/// Format a slice of values as `[a, b, c]`
pub fn format_values(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_value(*v)).collect();
    format!("[{}]", items.join(", "))
}
