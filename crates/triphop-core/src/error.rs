//! Construction-time error type shared by every `triphop-*` crate.
//!
//! Per the walk/walk-back contract, traversal failures are never reported
//! through `Result` — they are reported by returning `None` (see
//! `triphop_graph::WalkableEdge`). `CoreError` exists solely for the
//! *builder* side: malformed calendars, out-of-order periods, and similar
//! mistakes made while assembling a graph, before any search begins.

use thiserror::Error;

/// Errors produced while constructing scheduling primitives or payloads.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("period [{begin}, {end}] has end_time before begin_time")]
    InvertedPeriod { begin: i64, end: i64 },

    #[error(
        "periods must be strictly increasing and non-overlapping: a period \
         beginning at {begin} was added after a period ending at {prev_end}"
    )]
    OverlappingPeriods { prev_end: i64, begin: i64 },

    #[error("boarding/alighting arrays must be sorted and non-empty, got {len} entries")]
    EmptySchedule { len: usize },
}

/// Shorthand result type for all `triphop-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
