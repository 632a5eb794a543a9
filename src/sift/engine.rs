// Stepwise heap-sort engine

use crate::history::{StepHistory, StepRecord};
use crate::sift::errors::SiftError;
use crate::sift::types::{HeapOrder, Phase, StepKind};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt::Display;
use tracing::{debug, error, info};

/// Outcome of one atomic unit of work, before it becomes a [`StepRecord`]
struct Transition {
    kind: StepKind,
    narrative: Vec<String>,
    swap: Option<(usize, usize)>,
}

impl Transition {
    fn new(kind: StepKind, narrative: Vec<String>) -> Self {
        Transition {
            kind,
            narrative,
            swap: None,
        }
    }

    fn with_swap(mut self, a: usize, b: usize) -> Self {
        self.swap = Some((a, b));
        self
    }
}

/// Heap sort decomposed into externally triggered steps.
///
/// Each call to [`step`](SiftEngine::step) performs exactly one
/// comparison-and-maybe-swap, phase transition, or extraction, and appends
/// the resulting [`StepRecord`] to the engine's [`StepHistory`].
pub struct SiftEngine<T> {
    /// Canonical sequence restored by `start()` and `reset()`
    initial: Vec<T>,

    /// Array being sorted in place
    values: Vec<T>,

    /// Indices `< heap_boundary` form the heap; the rest are finalized
    heap_boundary: usize,

    phase: Phase,

    /// Unset until `start()` and again after `reset()`
    order: Option<HeapOrder>,

    /// Indices awaiting a sift check. Only the front is ever touched.
    work_queue: VecDeque<usize>,

    /// Parent and children highlighted by the latest step
    active: FxHashSet<usize>,

    history: StepHistory<T>,
}

impl<T: Ord + Clone + Display> SiftEngine<T> {
    /// Create an idle engine over the given initial sequence
    pub fn new(initial: Vec<T>) -> Self {
        let n = initial.len();
        SiftEngine {
            values: initial.clone(),
            initial,
            heap_boundary: n,
            phase: Phase::Idle,
            order: None,
            work_queue: VecDeque::new(),
            active: FxHashSet::default(),
            history: StepHistory::new(),
        }
    }

    /// Begin a fresh run, discarding any run in progress
    pub fn start(&mut self, order: HeapOrder) -> &StepRecord<T> {
        let n = self.initial.len();
        self.values = self.initial.clone();
        self.heap_boundary = n;
        self.phase = Phase::Building;
        self.order = Some(order);
        // Last non-leaf first, root last
        self.work_queue = (0..n / 2).rev().collect();
        self.active.clear();
        self.history.clear();

        info!(%order, len = n, "starting heap sort run");

        let mut narrative = vec![format!(
            "Phase 1: Building {}-heap to sort {}.",
            order,
            order.direction()
        )];
        match self.work_queue.front() {
            Some(first) => narrative.push(format!(
                "Starting from index {} (last non-leaf node).",
                first
            )),
            None => narrative.push("No non-leaf nodes to check.".to_string()),
        }

        self.record(Transition::new(StepKind::Started, narrative))
    }

    /// Back to a freshly constructed idle engine with no order chosen
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.heap_boundary = self.initial.len();
        self.phase = Phase::Idle;
        self.order = None;
        self.work_queue.clear();
        self.active.clear();
        self.history.clear();
        info!("engine reset");
    }

    /// Advance the simulation by one atomic unit.
    ///
    /// Returns [`SiftError::NothingToDo`] while idle, without touching any
    /// state or history.
    pub fn step(&mut self) -> Result<&StepRecord<T>, SiftError> {
        if self.phase == Phase::Idle {
            return Err(SiftError::NothingToDo);
        }
        let Some(order) = self.order else {
            return Err(self.abort("run in progress without a heap order".to_string()));
        };

        let transition = if !self.work_queue.is_empty() {
            self.sift_once(order)?
        } else {
            match self.phase {
                Phase::Building => self.finish_build(order),
                Phase::Sorting if self.heap_boundary > 1 => self.extract(order),
                _ => self.finish(order),
            }
        };

        Ok(self.record(transition))
    }

    /// Step until the engine goes idle. Returns the number of records produced.
    pub fn run_to_completion(&mut self) -> Result<usize, SiftError> {
        let mut steps = 0;
        loop {
            match self.step() {
                Ok(_) => steps += 1,
                Err(SiftError::NothingToDo) => return Ok(steps),
                Err(e) => return Err(e),
            }
        }
    }

    /// Compare the front index with its children and swap if needed
    fn sift_once(&mut self, order: HeapOrder) -> Result<Transition, SiftError> {
        let bound = self.heap_boundary;
        let front = self.work_queue.front().copied();
        let Some(i) = front else {
            return Err(self.abort("sift with an empty work queue".to_string()));
        };
        if i >= bound {
            return Err(self.abort(format!(
                "work queue index {} outside heap boundary {}",
                i, bound
            )));
        }

        let left = 2 * i + 1;
        let right = 2 * i + 2;

        let mut target = i;
        if left < bound && order.prefers(&self.values[left], &self.values[target]) {
            target = left;
        }
        if right < bound && order.prefers(&self.values[right], &self.values[target]) {
            target = right;
        }

        self.active = [i, left, right]
            .into_iter()
            .filter(|&idx| idx < bound)
            .collect();

        let mut narrative = vec![self.describe_comparison(i, left, right)];

        if target != i {
            narrative.push(format!(
                "Swap: child {} is {} than parent {}. Sifting {} down from index {} to index {}.",
                self.values[target],
                order.comparative_word(),
                self.values[i],
                self.values[i],
                i,
                target
            ));
            self.values.swap(i, target);
            // The sift session continues from the new position
            self.work_queue[0] = target;
            return Ok(Transition::new(StepKind::Swapped, narrative).with_swap(i, target));
        }

        self.work_queue.pop_front();
        match self.phase {
            Phase::Building => {
                narrative.push(format!(
                    "Index {} ({}) already satisfies the {}-heap property relative to its children. No swap needed.",
                    i, self.values[i], order
                ));
                match self.work_queue.front() {
                    Some(next) => narrative.push(format!("Next index to check: {}.", next)),
                    None => narrative.push("All non-leaf nodes checked.".to_string()),
                }
            }
            _ => narrative.push(format!(
                "Heap property restored (settled at index {}). Ready for next extraction.",
                i
            )),
        }
        Ok(Transition::new(StepKind::Settled, narrative))
    }

    fn describe_comparison(&self, i: usize, left: usize, right: usize) -> String {
        let bound = self.heap_boundary;
        let parent = format!("parent index {} ({})", i, self.values[i]);
        if right < bound {
            format!(
                "Comparing {} with left child index {} ({}) and right child index {} ({}).",
                parent, left, self.values[left], right, self.values[right]
            )
        } else if left < bound {
            format!(
                "Comparing {} with left child index {} ({}).",
                parent, left, self.values[left]
            )
        } else {
            format!("Checking {}: it has no children inside the heap.", parent)
        }
    }

    /// Building is done; move to Sorting without extracting yet
    fn finish_build(&mut self, order: HeapOrder) -> Transition {
        self.phase = Phase::Sorting;
        // A heap of at most one element has nothing to restore
        self.work_queue = if self.heap_boundary > 1 {
            VecDeque::from([0])
        } else {
            VecDeque::new()
        };
        self.active.clear();

        let mut narrative = match self.values.first() {
            Some(root) => vec![format!(
                "Heap structure complete! The {} element ({}) is at index 0.",
                order.extreme_word(),
                root
            )],
            None => vec!["Heap structure complete! There is nothing to sort.".to_string()],
        };
        narrative.push("Phase 2: Swapping root to the end to sort.".to_string());

        Transition::new(StepKind::HeapBuilt, narrative)
    }

    /// Move the root behind the boundary and shrink the heap by one
    fn extract(&mut self, order: HeapOrder) -> Transition {
        let last = self.heap_boundary - 1;
        let narrative = vec![
            format!(
                "EXTRACT: Moving {} element ({}) to index {} (final sorted position).",
                order.extreme_word(),
                self.values[0],
                last
            ),
            format!("Heap size is now {}.", last),
        ];

        self.values.swap(0, last);
        self.heap_boundary = last;
        self.work_queue = VecDeque::from([0]);
        self.active = [0, last].into_iter().collect();

        Transition::new(StepKind::Extracted, narrative).with_swap(0, last)
    }

    fn finish(&mut self, order: HeapOrder) -> Transition {
        self.phase = Phase::Idle;
        self.heap_boundary = 0;
        self.work_queue.clear();
        self.active.clear();

        info!(%order, "heap sort run finished");

        Transition::new(
            StepKind::Finished,
            vec![
                format!("Success: Array is fully sorted ({}).", order.direction()),
                format!("Final sequence: [{}].", format_values(&self.values)),
            ],
        )
    }

    /// Abandon the current run after observing impossible state
    fn abort(&mut self, message: String) -> SiftError {
        error!(%message, "aborting run");
        self.phase = Phase::Idle;
        self.work_queue.clear();
        self.active.clear();
        SiftError::invariant(message)
    }

    fn record(&mut self, transition: Transition) -> &StepRecord<T> {
        let mut active: Vec<usize> = self.active.iter().copied().collect();
        active.sort_unstable();

        debug!(
            index = self.history.len(),
            phase = %self.phase,
            kind = ?transition.kind,
            swap = ?transition.swap,
            boundary = self.heap_boundary,
            "step recorded"
        );

        let record = StepRecord {
            index: self.history.len(),
            kind: transition.kind,
            // `record` is only reached once an order is set
            order: self.order.unwrap_or(HeapOrder::Max),
            phase: self.phase,
            narrative: transition.narrative,
            heap_boundary: self.heap_boundary,
            work_queue: self.work_queue.iter().copied().collect(),
            values: self.values.clone(),
            active,
            swap: transition.swap,
        };
        self.history.push(record)
    }

    // ========== Getter methods for the UI ==========

    /// Current contents of the array
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn order(&self) -> Option<HeapOrder> {
        self.order
    }

    pub fn heap_boundary(&self) -> usize {
        self.heap_boundary
    }

    /// Indices highlighted by the latest step
    pub fn active_indices(&self) -> &FxHashSet<usize> {
        &self.active
    }

    pub fn work_queue(&self) -> &VecDeque<usize> {
        &self.work_queue
    }

    pub fn history(&self) -> &StepHistory<T> {
        &self.history
    }

    /// Mutable access for cursor navigation
    pub fn history_mut(&mut self) -> &mut StepHistory<T> {
        &mut self.history
    }

    /// Length of the sequence being sorted
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once the latest run has completed
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Idle
            && self
                .history
                .latest()
                .is_some_and(|r| r.kind == StepKind::Finished)
    }
}

/// Join values as `a, b, c`
pub fn format_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
