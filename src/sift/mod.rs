//! Stepwise heap-sort engine
//!
//! This module provides the core simulation:
//! - [`engine`]: [`SiftEngine`](engine::SiftEngine), the step-at-a-time state machine
//! - [`types`]: heap order, phase and step kind enums
//! - [`errors`]: engine error types
//! - [`constants`]: canonical input sequence and driver defaults
//!
//! # Execution Model
//!
//! A run starts in `Building`: every non-leaf index is queued, last first,
//! and sifted down one comparison per step. Once the queue drains the engine
//! switches to `Sorting`, where it alternates extractions (root swapped
//! behind the heap boundary) with sift-down sessions rooted at index 0.
//! When the heap holds a single element the run ends back in `Idle`.
//!
//! The engine never owns time. A driver decides when to call `step()`.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod types;

pub use engine::SiftEngine;
pub use errors::SiftError;
pub use types::{HeapOrder, Phase, StepKind};
