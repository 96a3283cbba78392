//! One submodule per [`crate::EdgePayload`] variant (§4.2–§4.13).

mod combination;
mod crossing;
mod custom;
mod egress;
mod elapse_time;
mod headway_alight;
mod headway_board;
mod link;
mod street;
mod trip_alight;
mod trip_board;
mod wait;

pub use combination::Combination;
pub use crossing::Crossing;
pub use custom::FnCustomHandler;
pub use egress::Egress;
pub use elapse_time::ElapseTime;
pub use headway_alight::HeadwayAlight;
pub use headway_board::HeadwayBoard;
pub use link::Link;
pub use street::Street;
pub use trip_alight::{Alighting, TripAlight};
pub use trip_board::{Boarding, TripBoard};
pub use wait::Wait;
