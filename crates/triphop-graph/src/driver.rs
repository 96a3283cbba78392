//! The contract a graph driver consumes from this crate (§6.1), and the
//! `EdgePayload` tagged union (§3.4, Design Note 9.1) that dispatches to it.

use std::fmt;

use crate::options::WalkOptions;
use crate::payload::{
    Combination, Crossing, Egress, ElapseTime, HeadwayAlight, HeadwayBoard, Link, Street,
    TripAlight, TripBoard, Wait,
};
use crate::state::State;

/// The two operations every edge payload implements (§4.1).
///
/// Given identical `(payload, state, options)` the result is bit-identical
/// (§6.1) — no hidden state, no interior mutability that could make two
/// calls diverge.
pub trait WalkableEdge<E: Copy> {
    /// Traverse this edge forward in time. `None` means this edge has no
    /// successor from `state` (§7 — absence is never a panic or an `Err`).
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>>;

    /// Traverse this edge backward in time, for reverse (arrive-before)
    /// search. `None` means this edge has no predecessor reaching `state`.
    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>>;
}

/// A handler backing the [`EdgePayload::Custom`] escape hatch (§4.12).
///
/// Mirrors the original's `{destroy, walk, walk_back}` dispatch table: the
/// `destroy` half of that table is just Rust's ordinary `Drop`, since the
/// handler owns whatever opaque state it closes over.
pub trait CustomHandler<E: Copy>: fmt::Debug {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>>;
    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>>;
}

/// The discriminator tag of an [`EdgePayload`] (§6.2).
///
/// Reproduces the variants this crate actually ships. The original source's
/// tag enumeration additionally lists `TRIPHOP_SCHEDULE`, `TRIPHOP`,
/// `EXTERNVALUE`, `HEADWAY`, and `ALIGHT` — internal/legacy tags with no
/// distinct payload type here: `ALIGHT` collapses into `TripAlight` per
/// Design Note 9.7, and the remaining three named no behavior this crate
/// implements.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgePayloadKind {
    Street,
    Egress,
    Link,
    Wait,
    ElapseTime,
    Crossing,
    TripBoard,
    TripAlight,
    HeadwayBoard,
    HeadwayAlight,
    Combination,
    Custom,
}

impl EdgePayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePayloadKind::Street => "STREET",
            EdgePayloadKind::Egress => "EGRESS",
            EdgePayloadKind::Link => "LINK",
            EdgePayloadKind::Wait => "WAIT",
            EdgePayloadKind::ElapseTime => "ELAPSE_TIME",
            EdgePayloadKind::Crossing => "CROSSING",
            EdgePayloadKind::TripBoard => "TRIPBOARD",
            EdgePayloadKind::TripAlight => "TRIPALIGHT",
            EdgePayloadKind::HeadwayBoard => "HEADWAYBOARD",
            EdgePayloadKind::HeadwayAlight => "HEADWAYALIGHT",
            EdgePayloadKind::Combination => "COMBINATION",
            EdgePayloadKind::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for EdgePayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tagged union of edge-payload variants (§3.4).
///
/// An `Edge` (owned by the not-implemented-here graph container) owns
/// exactly one `EdgePayload`; `Combination` is the one variant that
/// aggregates other payloads rather than owning unique leaf data.
#[derive(Debug)]
pub enum EdgePayload<E: Copy> {
    Street(Street),
    Egress(Egress),
    Link(Link),
    Wait(Wait),
    ElapseTime(ElapseTime),
    Crossing(Crossing),
    TripBoard(TripBoard),
    TripAlight(TripAlight),
    HeadwayBoard(HeadwayBoard),
    HeadwayAlight(HeadwayAlight),
    Combination(Combination<E>),
    Custom(Box<dyn CustomHandler<E>>),
}

impl<E: Copy> EdgePayload<E> {
    pub fn kind(&self) -> EdgePayloadKind {
        match self {
            EdgePayload::Street(_) => EdgePayloadKind::Street,
            EdgePayload::Egress(_) => EdgePayloadKind::Egress,
            EdgePayload::Link(_) => EdgePayloadKind::Link,
            EdgePayload::Wait(_) => EdgePayloadKind::Wait,
            EdgePayload::ElapseTime(_) => EdgePayloadKind::ElapseTime,
            EdgePayload::Crossing(_) => EdgePayloadKind::Crossing,
            EdgePayload::TripBoard(_) => EdgePayloadKind::TripBoard,
            EdgePayload::TripAlight(_) => EdgePayloadKind::TripAlight,
            EdgePayload::HeadwayBoard(_) => EdgePayloadKind::HeadwayBoard,
            EdgePayload::HeadwayAlight(_) => EdgePayloadKind::HeadwayAlight,
            EdgePayload::Combination(_) => EdgePayloadKind::Combination,
            EdgePayload::Custom(_) => EdgePayloadKind::Custom,
        }
    }
}

impl<E: Copy> WalkableEdge<E> for EdgePayload<E> {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        match self {
            EdgePayload::Street(p) => p.walk(state, options),
            EdgePayload::Egress(p) => p.walk(state, options),
            EdgePayload::Link(p) => p.walk(state, options),
            EdgePayload::Wait(p) => p.walk(state, options),
            EdgePayload::ElapseTime(p) => p.walk(state, options),
            EdgePayload::Crossing(p) => p.walk(state, options),
            EdgePayload::TripBoard(p) => p.walk(state, options),
            EdgePayload::TripAlight(p) => p.walk(state, options),
            EdgePayload::HeadwayBoard(p) => p.walk(state, options),
            EdgePayload::HeadwayAlight(p) => p.walk(state, options),
            EdgePayload::Combination(p) => p.walk(state, options),
            EdgePayload::Custom(handler) => handler.walk(state, options),
        }
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        match self {
            EdgePayload::Street(p) => p.walk_back(state, options),
            EdgePayload::Egress(p) => p.walk_back(state, options),
            EdgePayload::Link(p) => p.walk_back(state, options),
            EdgePayload::Wait(p) => p.walk_back(state, options),
            EdgePayload::ElapseTime(p) => p.walk_back(state, options),
            EdgePayload::Crossing(p) => p.walk_back(state, options),
            EdgePayload::TripBoard(p) => p.walk_back(state, options),
            EdgePayload::TripAlight(p) => p.walk_back(state, options),
            EdgePayload::HeadwayBoard(p) => p.walk_back(state, options),
            EdgePayload::HeadwayAlight(p) => p.walk_back(state, options),
            EdgePayload::Combination(p) => p.walk_back(state, options),
            EdgePayload::Custom(handler) => handler.walk_back(state, options),
        }
    }
}
