//! # Introduction
//!
//! heapstep runs heap sort one atomic step at a time, recording a narrated
//! [`history::StepRecord`] after every step. The history is then navigated
//! forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Driver (keys / autoplay) → SiftEngine::step → StepRecord → StepHistory → Presenter
//! ```
//!
//! 1. [`sift`] — the engine: heap order, phases, the work queue of indices
//!    awaiting a sift check, and one comparison-or-swap per step.
//! 2. [`history`] — immutable step records and a display cursor over them.
//! 3. [`cli`] — command-line configuration.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use heapstep::sift::{HeapOrder, Phase, SiftEngine};
//!
//! let mut engine = SiftEngine::new(vec![4, 10, 3, 5, 1, 2, 8, 7, 6, 9]);
//! engine.start(HeapOrder::Max);
//! while engine.step().is_ok() {}
//! assert_eq!(engine.phase(), Phase::Idle);
//! assert_eq!(engine.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! ```

pub mod cli;
pub mod history;
pub mod sift;
pub mod ui;
