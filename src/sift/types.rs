//! Small enums shared by the engine, its history and the UI

use super::errors::SiftError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which end of the ordering floats to the root of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// Greatest element at the root; the final sequence is ascending
    Max,
    /// Least element at the root; the final sequence is descending
    Min,
}

impl HeapOrder {
    /// True if `candidate` should replace `current` as the extremal element.
    ///
    /// Equal elements never win, so the earlier-evaluated index keeps its place.
    pub fn prefers<T: Ord>(self, candidate: &T, current: &T) -> bool {
        match self {
            HeapOrder::Max => candidate.cmp(current) == Ordering::Greater,
            HeapOrder::Min => candidate.cmp(current) == Ordering::Less,
        }
    }

    /// "largest" / "smallest"
    pub fn extreme_word(self) -> &'static str {
        match self {
            HeapOrder::Max => "largest",
            HeapOrder::Min => "smallest",
        }
    }

    /// "larger" / "smaller"
    pub fn comparative_word(self) -> &'static str {
        match self {
            HeapOrder::Max => "larger",
            HeapOrder::Min => "smaller",
        }
    }

    /// Direction of the final sequence
    pub fn direction(self) -> &'static str {
        match self {
            HeapOrder::Max => "ascending",
            HeapOrder::Min => "descending",
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "max"),
            HeapOrder::Min => write!(f, "min"),
        }
    }
}

impl FromStr for HeapOrder {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "ascending" | "asc" => Ok(HeapOrder::Max),
            "min" | "descending" | "desc" => Ok(HeapOrder::Min),
            _ => Err(SiftError::UnknownOrder(s.to_string())),
        }
    }
}

/// Lifecycle phase of a run. `Idle` is both the initial and the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Building,
    Sorting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Building => "Building",
            Phase::Sorting => "Sorting",
        };
        write!(f, "{}", name)
    }
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Synthetic record appended by `start()`
    Started,
    /// A parent was swapped with its extremal child; the sift continues
    Swapped,
    /// The parent already dominates its children; the sift session ends
    Settled,
    /// Heap construction finished; the engine moved to `Sorting`
    HeapBuilt,
    /// The root was moved behind the heap boundary
    Extracted,
    /// The run completed and the engine went back to `Idle`
    Finished,
}
