//! §4.6 — adds a fixed time delta.

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// Adds a fixed `seconds` delta to `time` and `weight` on walk; subtracts on
/// walk-back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElapseTime {
    pub seconds: i64,
}

impl ElapseTime {
    pub fn new(seconds: i64) -> Self {
        ElapseTime { seconds }
    }
}

impl<E: Copy> WalkableEdge<E> for ElapseTime {
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        Some(state.at_time(state.time + self.seconds, self.seconds as f64))
    }

    fn walk_back(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        Some(state.at_time(state.time - self.seconds, self.seconds as f64))
    }
}
