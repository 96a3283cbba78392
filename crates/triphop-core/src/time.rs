//! Time and cost type aliases shared across the crate family.
//!
//! All absolute times are integer seconds since an arbitrary epoch (the host
//! application's choice — this crate never calls into a system clock). Using
//! a plain `i64` rather than a wrapped newtype keeps arithmetic on `State`
//! fields (`time + delta`, `depart - now_tod`, …) free of unwrapping.

/// Seconds in one calendar day. Used throughout the scheduling layer to
/// convert between absolute time and "time of day".
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Absolute wall-clock time, in seconds since an epoch chosen by the host.
pub type Time = i64;

/// Generalized cost accumulated while walking the graph. Floating point so
/// that reluctance multipliers and per-meter surcharges (§3.2) don't need to
/// be pre-scaled to integers.
pub type Weight = f64;
