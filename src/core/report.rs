//! Plain-text and JSON renderings of a whole trace.

use std::fmt::Write as _;

use super::step::format_values;
use super::trace::Trace;

/// Shown in place of a log when no sort has been started
pub const NO_SORT_IN_PROGRESS: &str = "No sorting in progress";

const RULE_WIDTH: usize = 80;

/// Render every step of `trace` as a human-readable log
pub fn render_log(trace: &Trace) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "COMPLETE BUBBLE SORT PROCESS");
    let _ = writeln!(out, "{heavy}");
    out.push('\n');

    for step in trace {
        let _ = writeln!(out, "STEP {}: {}", step.sequence_number, step.description);
        let _ = writeln!(out, "Array: {}", format_values(&step.array_state));
        if let Some((left, right)) = step.compared_indices {
            let _ = writeln!(out, "Comparing: [{}, {}]", left, right);
        }
        if step.did_swap {
            out.push_str(">>> SWAP <<<\n");
        }
        let _ = writeln!(out, "{light}");
    }

    out
}

/// Pretty-printed JSON array of the trace's steps
pub fn render_json(trace: &Trace) -> serde_json::Result<String> {
    serde_json::to_string_pretty(trace)
}
