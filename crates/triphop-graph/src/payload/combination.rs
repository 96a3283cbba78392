//! §4.13 — a pre-assembled macro-edge composed of an ordered list of inner
//! payloads, with a single-slot result cache (Design Note 9.6).

use std::cell::RefCell;

use triphop_core::TripId;

use crate::driver::{EdgePayload, WalkableEdge};
use crate::options::WalkOptions;
use crate::state::State;

/// The subset of `State` fields compared for cache-key equality. Excludes
/// `prev_edge` (the generic `E` carries no `PartialEq` bound in this crate,
/// §6.1's pinned `WalkableEdge<E: Copy>`) — every other field fully
/// determines the traversal's outcome, so equality on these is exactly the
/// "structural equality on the input State" Design Note 9.6 calls for.
#[derive(Clone, Debug, PartialEq)]
struct Fingerprint {
    time: i64,
    weight: f64,
    dist_walked: f64,
    num_transfers: u32,
    trip_id: Option<TripId>,
    stop_sequence: Option<u32>,
    service_period: Option<usize>,
    last_way: Option<u64>,
}

impl Fingerprint {
    fn of<E: Copy>(state: &State<E>) -> Self {
        Fingerprint {
            time: state.time,
            weight: state.weight,
            dist_walked: state.dist_walked,
            num_transfers: state.num_transfers,
            trip_id: state.trip_id.clone(),
            stop_sequence: state.stop_sequence,
            service_period: state.service_period,
            last_way: state.last_way,
        }
    }
}

#[derive(Debug)]
struct CacheSlot<E: Copy> {
    key: Fingerprint,
    output: State<E>,
}

/// An ordered chain of inner payloads applied as one macro-edge.
///
/// Invariant (§4.13): composition is associative with concatenation of
/// inner lists; a `Combination` with zero payloads behaves as `Link`.
#[derive(Debug)]
pub struct Combination<E: Copy> {
    payloads: Vec<EdgePayload<E>>,
    forward_cache: RefCell<Option<CacheSlot<E>>>,
    backward_cache: RefCell<Option<CacheSlot<E>>>,
}

impl<E: Copy> Combination<E> {
    pub fn new(payloads: Vec<EdgePayload<E>>) -> Self {
        Combination {
            payloads,
            forward_cache: RefCell::new(None),
            backward_cache: RefCell::new(None),
        }
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Appends a payload to the chain, invalidating both cache slots — any
    /// structural mutation of the combination invalidates its cache
    /// (§4.13's caching clause).
    pub fn push(&mut self, payload: EdgePayload<E>) {
        self.payloads.push(payload);
        *self.forward_cache.get_mut() = None;
        *self.backward_cache.get_mut() = None;
    }
}

impl<E: Copy> WalkableEdge<E> for Combination<E> {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let key = Fingerprint::of(state);
        if let Some(slot) = self.forward_cache.borrow().as_ref() {
            if slot.key == key {
                log::trace!(target: "triphop_graph::combination", "forward cache hit");
                return Some(slot.output.clone());
            }
        }
        log::trace!(target: "triphop_graph::combination", "forward cache miss");

        let mut current = state.clone();
        for payload in &self.payloads {
            current = payload.walk(&current, options)?;
        }

        *self.forward_cache.borrow_mut() = Some(CacheSlot { key, output: current.clone() });
        Some(current)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let key = Fingerprint::of(state);
        if let Some(slot) = self.backward_cache.borrow().as_ref() {
            if slot.key == key {
                log::trace!(target: "triphop_graph::combination", "backward cache hit");
                return Some(slot.output.clone());
            }
        }
        log::trace!(target: "triphop_graph::combination", "backward cache miss");

        let mut current = state.clone();
        for payload in self.payloads.iter().rev() {
            current = payload.walk_back(&current, options)?;
        }

        *self.backward_cache.borrow_mut() = Some(CacheSlot { key, output: current.clone() });
        Some(current)
    }
}
