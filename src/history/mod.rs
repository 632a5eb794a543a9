// Step records and history navigation

use crate::sift::errors::SiftError;
use crate::sift::types::{HeapOrder, Phase, StepKind};

/// Immutable fact about one step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord<T> {
    /// Position in history; 0 is the synthetic start record
    pub index: usize,
    pub kind: StepKind,
    pub order: HeapOrder,
    /// Phase after the step completed
    pub phase: Phase,
    /// Human-readable lines describing the step
    pub narrative: Vec<String>,
    pub heap_boundary: usize,
    pub work_queue: Vec<usize>,
    pub values: Vec<T>,
    /// Sorted copy of the highlighted indices
    pub active: Vec<usize>,
    /// Indices exchanged by this step, if any
    pub swap: Option<(usize, usize)>,
}

impl<T> StepRecord<T> {
    /// Narrative joined into a single line
    pub fn message(&self) -> String {
        self.narrative.join(" ")
    }

    /// Whether index `i` lies in the finalized suffix
    pub fn is_finalized(&self, i: usize) -> bool {
        i >= self.heap_boundary
    }
}

/// Append-only log of [`StepRecord`]s with a display cursor.
///
/// Moving the cursor only selects which snapshot to read. It never rewinds
/// or re-drives the engine that produced the records.
#[derive(Debug, Clone)]
pub struct StepHistory<T> {
    records: Vec<StepRecord<T>>,
    cursor: usize,
}

impl<T> StepHistory<T> {
    pub fn new() -> Self {
        StepHistory {
            records: Vec::new(),
            cursor: 0,
        }
    }

    /// Append a record and move the cursor onto it
    pub(crate) fn push(&mut self, record: StepRecord<T>) -> &StepRecord<T> {
        self.records.push(record);
        self.cursor = self.records.len() - 1;
        &self.records[self.cursor]
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.cursor = 0;
    }

    /// Get the record at position `k`
    pub fn at(&self, k: usize) -> Result<&StepRecord<T>, SiftError> {
        self.records.get(k).ok_or(SiftError::IndexOutOfRange {
            index: k,
            len: self.records.len(),
        })
    }

    /// Record under the cursor, `None` while the history is empty
    pub fn current(&self) -> Option<&StepRecord<T>> {
        self.records.get(self.cursor)
    }

    /// Most recently appended record
    pub fn latest(&self) -> Option<&StepRecord<T>> {
        self.records.last()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back one record. Returns `None` at the first record.
    pub fn previous(&mut self) -> Option<&StepRecord<T>> {
        if self.cursor == 0 || self.records.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.records.get(self.cursor)
    }

    /// Move the cursor forward one record. Returns `None` at the latest record.
    pub fn next(&mut self) -> Option<&StepRecord<T>> {
        if self.cursor + 1 >= self.records.len() {
            return None;
        }
        self.cursor += 1;
        self.records.get(self.cursor)
    }

    pub fn rewind_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_latest(&mut self) {
        self.cursor = self.records.len().saturating_sub(1);
    }

    /// True when the cursor sits on the newest record (or history is empty)
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 >= self.records.len()
    }

    pub fn records(&self) -> &[StepRecord<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for StepHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize) -> StepRecord<i64> {
        StepRecord {
            index,
            kind: StepKind::Settled,
            order: HeapOrder::Max,
            phase: Phase::Building,
            narrative: vec![format!("step {}", index)],
            heap_boundary: 3,
            work_queue: vec![],
            values: vec![1, 2, 3],
            active: vec![],
            swap: None,
        }
    }

    fn history_of(len: usize) -> StepHistory<i64> {
        let mut history = StepHistory::new();
        for i in 0..len {
            history.push(record(i));
        }
        history
    }

    #[test]
    fn test_push_moves_cursor_to_latest() {
        let history = history_of(3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert!(history.is_at_latest());
        assert_eq!(history.current().unwrap().index, 2);
    }

    #[test]
    fn test_at_out_of_range() {
        let history = history_of(2);
        assert_eq!(history.at(1).unwrap().index, 1);
        assert_eq!(
            history.at(2).unwrap_err(),
            SiftError::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_previous_and_next_stop_at_edges() {
        let mut history = history_of(3);
        assert!(history.next().is_none());
        assert_eq!(history.previous().unwrap().index, 1);
        assert_eq!(history.previous().unwrap().index, 0);
        assert!(history.previous().is_none());
        assert_eq!(history.cursor(), 0);
        assert!(!history.is_at_latest());
        assert_eq!(history.next().unwrap().index, 1);
    }

    #[test]
    fn test_jumps() {
        let mut history = history_of(4);
        history.rewind_to_start();
        assert_eq!(history.current().unwrap().index, 0);
        history.jump_to_latest();
        assert_eq!(history.current().unwrap().index, 3);
    }

    #[test]
    fn test_empty_history() {
        let mut history: StepHistory<i64> = StepHistory::new();
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert!(history.previous().is_none());
        assert!(history.next().is_none());
        assert!(history.is_at_latest());
        history.jump_to_latest();
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut history = history_of(5);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }
}
