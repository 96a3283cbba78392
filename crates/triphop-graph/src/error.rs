use thiserror::Error;

use triphop_schedule::ScheduleError;

/// Construction-time failures for `triphop-graph` types.
///
/// Never appears across a `walk`/`walk_back` boundary — those report failure
/// by returning `None` (§7). This type exists solely for payload builders
/// (e.g. `TripBoard::new` rejecting boarding arrays that aren't sorted by
/// `depart`).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("TripBoard boarding arrays must be equal length and sorted by depart time, got lengths trip_ids={trip_ids}, departs={departs}, stop_sequences={stop_sequences}")]
    MismatchedBoardingArrays {
        trip_ids: usize,
        departs: usize,
        stop_sequences: usize,
    },

    #[error("boarding/alighting array not sorted ascending at index {index}")]
    UnsortedBoardingArray { index: usize },

    #[error("HeadwayBoard/HeadwayAlight window is inverted: start_time={start_time} > end_time={end_time}")]
    InvertedHeadwayWindow { start_time: i64, end_time: i64 },

    #[error("headway_secs must be positive, got {0}")]
    NonPositiveHeadway(i64),
}

pub type GraphResult<T> = Result<T, GraphError>;
