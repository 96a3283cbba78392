//! §4.7 — the in-vehicle segment between two consecutive stops of a trip.

use std::collections::HashMap;

use triphop_core::TripId;

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// Maps `trip_id` to the number of seconds spent crossing this segment.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    crossing_times: HashMap<TripId, i64>,
}

impl Crossing {
    pub fn new(crossing_times: HashMap<TripId, i64>) -> Self {
        Crossing { crossing_times }
    }

    pub fn crossing_time(&self, trip_id: &TripId) -> Option<i64> {
        self.crossing_times.get(trip_id).copied()
    }
}

impl<E: Copy> WalkableEdge<E> for Crossing {
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let trip_id = state.trip_id.as_ref()?;
        let seconds = self.crossing_time(trip_id)?;
        Some(state.at_time(state.time + seconds, seconds as f64))
    }

    fn walk_back(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let trip_id = state.trip_id.as_ref()?;
        let seconds = self.crossing_time(trip_id)?;
        Some(state.at_time(state.time - seconds, seconds as f64))
    }
}
