//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the sequence as colored cells with their indices
//! - [`tree`]: the same sequence laid out as a binary heap, level by level
//! - [`narrative`]: the current step's explanation, work queue and history list
//! - [`status`]: status bar with keybindings and playback state
//!
//! Every pane reads a [`StepView`], so the presenter renders a past record
//! exactly like the live engine state.

pub mod array;
pub mod narrative;
pub mod status;
pub mod tree;

pub use array::render_array_pane;
pub use narrative::render_narrative_pane;
pub use status::render_status_bar;
pub use tree::render_tree_pane;

use crate::history::StepRecord;
use crate::sift::types::Phase;

/// Everything a pane needs to draw one moment of a run
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    pub values: &'a [i64],
    pub heap_boundary: usize,
    pub active: &'a [usize],
    pub work_queue: &'a [usize],
    pub narrative: &'a [String],
    pub phase: Phase,
}

impl<'a> StepView<'a> {
    pub fn from_record(record: &'a StepRecord<i64>) -> Self {
        StepView {
            values: &record.values,
            heap_boundary: record.heap_boundary,
            active: &record.active,
            work_queue: &record.work_queue,
            narrative: &record.narrative,
            phase: record.phase,
        }
    }

    /// View of an engine that has no run yet
    pub fn idle(values: &'a [i64], narrative: &'a [String]) -> Self {
        StepView {
            values,
            heap_boundary: values.len(),
            active: &[],
            work_queue: &[],
            narrative,
            phase: Phase::Idle,
        }
    }
}
