//! `triphop-graph` — the `EdgePayload` tagged union (§3.4), the `State`/
//! `WalkOptions` traveler model (§3.1–§3.2), and the `walk`/`walk_back`
//! traversal contract (§4, §6.1) a graph driver dispatches through.
//!
//! This crate owns no graph: no vertex or edge storage, no shortest-path
//! driver, no path reconstruction beyond the trivial [`path::Path`]
//! container. It is the payload family and its state-transformation
//! semantics — the hard part this whole crate family exists to get right.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|---------------------------------------------------------------|
//! | [`state`]  | `State<E>`, the value-typed traveler tuple                  |
//! | [`options`]| `WalkOptions`, `HeadwayWaitPolicy`                          |
//! | [`driver`] | `WalkableEdge<E>`, `EdgePayload<E>`, `EdgePayloadKind`, `CustomHandler<E>` |
//! | [`payload`]| One submodule per payload variant (`street`, `wait`, `trip_board`, …) |
//! | [`path`]   | `Path<V, E>`, the alternating vertex/edge sequence          |
//! | [`error`]  | `GraphError`, `GraphResult<T>` — construction-time only     |
//!
//! # Generic edge handle
//!
//! `State<E>` and `WalkableEdge<E>` are generic over `E: Copy`, a
//! caller-supplied opaque back-reference standing in for "the edge this
//! crate doesn't own a pointer to" (§3.1). This crate never constructs an
//! `E` value of its own; stamping `State::prev_edge` with the edge just
//! traversed is the driver's responsibility after each `walk`/`walk_back`
//! call returns `Some`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod driver;
pub mod error;
pub mod options;
pub mod path;
pub mod payload;
pub mod state;


pub use driver::{CustomHandler, EdgePayload, EdgePayloadKind, WalkableEdge};
pub use error::{GraphError, GraphResult};
pub use options::{HeadwayWaitPolicy, WalkOptions, WalkOptionsBuilder};
pub use path::Path;
pub use payload::{
    Alighting, Boarding, Combination, Crossing, Egress, ElapseTime, FnCustomHandler, HeadwayAlight,
    HeadwayBoard, Link, Street, TripAlight, TripBoard, Wait,
};
pub use state::State;
