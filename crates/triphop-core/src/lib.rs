//! `triphop-core` — shared identifiers, time constants, and the error type
//! for the `triphop` edge-payload engine.
//!
//! This crate is a dependency of every other `triphop-*` crate. It
//! intentionally has no `triphop-*` dependencies and a minimal external one
//! (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|----------------------------------------------------|
//! | [`ids`]  | `ServiceId`, `TripId`                             |
//! | [`time`] | `SECONDS_PER_DAY`, `Time`, `Weight` aliases       |
//! | [`error`]| `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ServiceId, TripId};
pub use time::{Time, Weight, SECONDS_PER_DAY};
