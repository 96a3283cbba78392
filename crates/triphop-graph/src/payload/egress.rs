//! §4.3 — a pedestrian link leaving the transit system.

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// Same time computation as [`super::Street`] but does not draw against
/// `max_walk` and applies no hill or turn penalties (§4.3).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Egress {
    pub name: String,
    /// Length in meters.
    pub length: f64,
}

impl Egress {
    pub fn new(name: impl Into<String>, length: f64) -> Self {
        Egress {
            name: name.into(),
            length,
        }
    }
}

impl<E: Copy> WalkableEdge<E> for Egress {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let time = self.length / options.walking_speed;
        let weight = time * options.walking_reluctance;
        let mut next = state.at_time(state.time + time.round() as i64, weight);
        next.dist_walked += self.length;
        Some(next)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let time = self.length / options.walking_speed;
        let weight = time * options.walking_reluctance;
        let mut next = state.at_time(state.time - time.round() as i64, weight);
        next.dist_walked += self.length;
        Some(next)
    }
}
