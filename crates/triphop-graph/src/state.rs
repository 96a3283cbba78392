//! The traveler state transformed by every `walk`/`walk_back` call.

use triphop_core::{Time, TripId, Weight};

/// A traveler's position in time, accumulated cost, and transit context.
///
/// Value-typed (§3.1): every traversal returns a **new** `State`, never
/// mutates its input. `walk`/`walk_back` failing is represented as `None`
/// from the caller, not as a sentinel field here.
///
/// `prev_edge` is generic over a caller-supplied, `Copy` edge handle (`E`) —
/// this crate owns no graph, so it cannot construct a handle meaning "the
/// edge just traversed". Per §6.1's pinned `WalkableEdge` signature (no edge
/// handle is passed into `walk`/`walk_back`), this crate never writes
/// `prev_edge` itself; stamping it with the edge just taken is the driver's
/// job, done after each successful call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State<E: Copy> {
    pub time: Time,
    pub weight: Weight,
    pub dist_walked: f64,
    pub num_transfers: u32,
    pub prev_edge: Option<E>,
    pub trip_id: Option<TripId>,
    pub stop_sequence: Option<u32>,
    pub service_period: Option<usize>,
    /// Way-id of the most recently walked `Street`, if any.
    ///
    /// Not one of the §3.1 scalar fields — the original core finds this by
    /// dereferencing `prev_edge` and checking whether its payload is a
    /// `Street`, which this crate cannot do without owning the graph. This
    /// is the one piece of that dereference `Street::walk`/`walk_back`
    /// actually need (§4.2's turn-penalty check), cached directly instead.
    pub last_way: Option<u64>,
}

impl<E: Copy> State<E> {
    /// A fresh state at `time` with everything else zeroed/absent — the
    /// usual starting point for a forward search.
    pub fn initial(time: Time) -> Self {
        State {
            time,
            weight: 0.0,
            dist_walked: 0.0,
            num_transfers: 0,
            prev_edge: None,
            trip_id: None,
            stop_sequence: None,
            service_period: None,
            last_way: None,
        }
    }

    /// Returns a copy with `time` and accumulated `weight` advanced; all
    /// other fields unchanged.
    pub fn at_time(&self, new_time: Time, added_weight: Weight) -> Self {
        State {
            time: new_time,
            weight: self.weight + added_weight,
            ..self.clone()
        }
    }

    /// Clears trip context (used by `TripBoard::walk_back` and
    /// `TripAlight::walk`, both no-cost trip-clears per §4.8 and §4.9).
    pub fn without_trip(&self) -> Self {
        State {
            trip_id: None,
            stop_sequence: None,
            ..self.clone()
        }
    }
}
