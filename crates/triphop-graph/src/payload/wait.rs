//! §4.5 — a timed boundary that forces the traveler past a fixed
//! time-of-day.

use std::sync::Arc;

use triphop_schedule::Timezone;

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// Forces the traveler past `end` seconds-since-local-midnight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wait {
    /// Seconds since local midnight that the traveler must reach.
    pub end: i64,
    pub timezone: Arc<Timezone>,
}

impl Wait {
    pub fn new(end: i64, timezone: Arc<Timezone>) -> Self {
        Wait { end, timezone }
    }
}

impl<E: Copy> WalkableEdge<E> for Wait {
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let now_tod = self.timezone.time_since_midnight(state.time)?;
        let datum = self.timezone.datum_midnight(state.time)?;

        let new_time = if now_tod <= self.end {
            state.time + (self.end - now_tod)
        } else {
            datum + self.end + triphop_core::SECONDS_PER_DAY
        };

        let elapsed = new_time - state.time;
        Some(state.at_time(new_time, elapsed as f64))
    }

    /// Produces the latest pre-`end` state: sets `time` to the most recent
    /// local occurrence of `end` at or before `state.time`.
    fn walk_back(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let now_tod = self.timezone.time_since_midnight(state.time)?;
        let datum = self.timezone.datum_midnight(state.time)?;

        let new_time = if now_tod >= self.end {
            datum + self.end
        } else {
            datum - triphop_core::SECONDS_PER_DAY + self.end
        };

        let elapsed = state.time - new_time;
        Some(state.at_time(new_time, elapsed as f64))
    }
}
