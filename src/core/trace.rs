//! Instrumented bubble sort that records every comparison and swap.

use serde::Serialize;

use super::step::{format_value, format_values, Step, StepKind};

/// Knobs for trace generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Record an explicit step when a compared pair is already in order
    pub record_no_swap: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            record_no_swap: true,
        }
    }
}

/// Counters describing how much work a sort performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub passes: usize,
}

/// Complete, immutable record of one bubble sort run.
///
/// A trace is only built by [`generate`] / [`generate_with`], which always
/// emit at least an initial and a complete step, so it is never empty and
/// every step's `sequence_number` equals its index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for generated traces; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Index of the last step
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn initial(&self) -> &Step {
        &self.steps[0]
    }

    pub fn final_step(&self) -> &Step {
        &self.steps[self.last_index()]
    }

    /// The array as it was handed to the generator
    pub fn input(&self) -> &[f64] {
        &self.initial().array_state
    }

    /// The fully sorted array
    pub fn sorted(&self) -> &[f64] {
        &self.final_step().array_state
    }

    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats::default();
        for step in &self.steps {
            match step.kind {
                StepKind::Compare => stats.comparisons += 1,
                StepKind::Swap => stats.swaps += 1,
                _ => {}
            }
            if let Some(pass) = step.pass {
                stats.passes = stats.passes.max(pass);
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Appends steps with contiguous sequence numbers
struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn push(
        &mut self,
        kind: StepKind,
        pass: Option<usize>,
        values: &[f64],
        compared_indices: Option<(usize, usize)>,
        description: String,
    ) {
        self.steps.push(Step {
            sequence_number: self.steps.len(),
            kind,
            pass,
            array_state: values.to_vec(),
            compared_indices,
            did_swap: kind == StepKind::Swap,
            description,
        });
    }

    fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }
}

/// Run bubble sort over `input` with default options
pub fn generate(input: &[f64]) -> Trace {
    generate_with(input, TraceOptions::default())
}

/// Run bubble sort over a private copy of `input`, recording every step.
///
/// Pass `i` scans the unsorted prefix `0..n - i - 1`; a pass without any
/// swap certifies the array sorted and ends the run early. Only strictly
/// greater left elements are swapped, so equal values keep their order.
pub fn generate_with(input: &[f64], options: TraceOptions) -> Trace {
    let mut values = input.to_vec();
    let n = values.len();
    let mut recorder = Recorder::new();

    recorder.push(
        StepKind::Initial,
        None,
        &values,
        None,
        format!("Initial array: {}", format_values(&values)),
    );

    for i in 0..n.saturating_sub(1) {
        let pass = i + 1;
        let mut swapped = false;

        for j in 0..n - i - 1 {
            let (left, right) = (values[j], values[j + 1]);
            recorder.push(
                StepKind::Compare,
                Some(pass),
                &values,
                Some((j, j + 1)),
                format!(
                    "Pass {}: Compare arr[{}]={} with arr[{}]={}",
                    pass,
                    j,
                    format_value(left),
                    j + 1,
                    format_value(right)
                ),
            );

            if left > right {
                values.swap(j, j + 1);
                swapped = true;
                recorder.push(
                    StepKind::Swap,
                    Some(pass),
                    &values,
                    Some((j, j + 1)),
                    format!("Pass {}: SWAPPED! Now: {}", pass, format_values(&values)),
                );
            } else if options.record_no_swap {
                recorder.push(
                    StepKind::NoSwap,
                    Some(pass),
                    &values,
                    Some((j, j + 1)),
                    format!("Pass {}: No swap", pass),
                );
            }
        }

        if !swapped {
            recorder.push(
                StepKind::SortedEarly,
                Some(pass),
                &values,
                None,
                format!("Pass {}: Sorted!", pass),
            );
            break;
        }
    }

    recorder.push(
        StepKind::Complete,
        None,
        &values,
        None,
        format!("COMPLETE: {}", format_values(&values)),
    );

    let trace = recorder.finish();
    tracing::debug!(
        values = n,
        steps = trace.len(),
        record_no_swap = options.record_no_swap,
        "Generated bubble sort trace"
    );
    trace
}
