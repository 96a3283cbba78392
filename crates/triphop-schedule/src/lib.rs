//! `triphop-schedule` — piecewise-constant absolute-time lookups:
//! [`Timezone`] (wall-clock seconds → UTC offset) and [`ServiceCalendar`]
//! (wall-clock seconds → the set of services running that day).
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|------------------------------------------------------|
//! | [`timezone`] | `TimezonePeriod`, `Timezone`                        |
//! | [`calendar`] | `ServicePeriod`, `ServiceCalendar`                  |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                |
//!
//! # Data layout
//!
//! Both types store their periods in a `Vec` sorted ascending by
//! `begin_time` and look them up with `partition_point` (binary search),
//! rather than the original C core's doubly-linked list rewindable to head
//! (Design Note 9.2). Periods are appended once at construction time and are
//! immutable afterward — there is no mutation after `build()`, so lookups
//! never race with appends.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod calendar;
pub mod error;
pub mod timezone;

#[cfg(test)]
mod tests;

pub use calendar::{ServiceCalendar, ServicePeriod};
pub use error::{ScheduleError, ScheduleResult};
pub use timezone::{Timezone, TimezonePeriod};
