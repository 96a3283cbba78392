//! §4.4 — a zero-cost, zero-time edge gluing co-located vertices.

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// Glues two co-located vertices with no time or weight cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link;

impl<E: Copy> WalkableEdge<E> for Link {
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        Some(state.clone())
    }

    fn walk_back(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        Some(state.clone())
    }
}
