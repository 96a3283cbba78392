//! §4.8 — the canonical transit-boarding edge and its next-boarding search.

use std::sync::Arc;

use triphop_core::{CoreError, ServiceId, TripId, SECONDS_PER_DAY};
use triphop_schedule::{ScheduleError, ServiceCalendar, Timezone};

use crate::driver::WalkableEdge;
use crate::error::{GraphError, GraphResult};
use crate::options::WalkOptions;
use crate::state::State;

/// One boarding opportunity: a trip, its departure time-of-day, and its
/// ordinal stop along that trip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boarding {
    pub trip_id: TripId,
    /// Seconds since local midnight; may exceed 86400 for a schedule
    /// running past midnight (§6.3's `[0, 86400 + overage]` range).
    pub depart: i64,
    pub stop_sequence: u32,
}

/// A sorted-by-`depart` schedule of boardings at one stop for one
/// `service_id`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripBoard {
    boardings: Vec<Boarding>,
    pub service_id: ServiceId,
    pub calendar: Arc<ServiceCalendar>,
    pub timezone: Arc<Timezone>,
    pub agency: String,
    /// Max seconds by which any `depart` exceeds 86400; `-1` if none do
    /// (§6.3). Derived from `boardings` at construction, not supplied by
    /// the caller — the original stores it directly, but it is always a
    /// pure function of the departure array, so deriving it removes a way
    /// for the two to drift out of sync.
    overage: i64,
}

impl TripBoard {
    /// Builds a `TripBoard`, validating that the three parallel arrays are
    /// equal length and that `departs` is sorted ascending (§4.8's stated
    /// invariant; the original core assumed this at the call site, this
    /// port upgrades that assumption to a checked constructor, per §4.14).
    pub fn new(
        trip_ids: Vec<TripId>,
        departs: Vec<i64>,
        stop_sequences: Vec<u32>,
        service_id: ServiceId,
        calendar: Arc<ServiceCalendar>,
        timezone: Arc<Timezone>,
        agency: impl Into<String>,
    ) -> GraphResult<Self> {
        if trip_ids.len() != departs.len() || departs.len() != stop_sequences.len() {
            return Err(GraphError::MismatchedBoardingArrays {
                trip_ids: trip_ids.len(),
                departs: departs.len(),
                stop_sequences: stop_sequences.len(),
            });
        }
        if departs.is_empty() {
            return Err(GraphError::Schedule(ScheduleError::Core(CoreError::EmptySchedule {
                len: 0,
            })));
        }
        for (i, window) in departs.windows(2).enumerate() {
            if window[1] < window[0] {
                return Err(GraphError::UnsortedBoardingArray { index: i + 1 });
            }
        }

        let overage = departs
            .iter()
            .map(|&d| d - SECONDS_PER_DAY)
            .filter(|&o| o >= 0)
            .max()
            .unwrap_or(-1);

        let boardings = trip_ids
            .into_iter()
            .zip(departs)
            .zip(stop_sequences)
            .map(|((trip_id, depart), stop_sequence)| Boarding {
                trip_id,
                depart,
                stop_sequence,
            })
            .collect();

        Ok(TripBoard {
            boardings,
            service_id,
            calendar,
            timezone,
            agency: agency.into(),
            overage,
        })
    }

    pub fn overage(&self) -> i64 {
        self.overage
    }

    pub fn boardings(&self) -> &[Boarding] {
        &self.boardings
    }

    /// The next-boarding search of §4.8 steps 1–5: locates the earliest
    /// boarding at or after `t`, returning its wall-clock departure time
    /// and the chosen [`Boarding`].
    fn find_board(&self, t: i64) -> Option<(i64, &Boarding)> {
        let period_idx = self.calendar.index_of_or_after(t)?;
        let mut resolved_idx = period_idx;
        let mut period = self.calendar.period_at(period_idx)?;
        if !period.has_service(self.service_id) {
            let (idx, p) = self.calendar.next_period_with_service(period_idx, self.service_id)?;
            resolved_idx = idx;
            period = p;
        }

        let tz_offset = self.timezone.utc_offset(t)?;
        let now_tod = period.normalize_time(tz_offset, t);

        let i = self.boardings.partition_point(|b| b.depart < now_tod);
        if i < self.boardings.len() {
            let b = &self.boardings[i];
            let t_board = period.datum_midnight(tz_offset) + b.depart;
            return Some((t_board, b));
        }

        // Rare corner (§4.8 step 4, first clause): state.time falls so
        // early in today's period that yesterday's overage-extended
        // schedule would still be in the future relative to it.
        if self.overage >= 0 && resolved_idx > 0 {
            if let Some((prev_idx, prev_period)) =
                self.calendar.prev_period_with_service(resolved_idx - 1, self.service_id)
            {
                if prev_idx == resolved_idx - 1 {
                    let shifted_target = now_tod + SECONDS_PER_DAY;
                    let j = self.boardings.partition_point(|b| b.depart < shifted_target);
                    if j < self.boardings.len() {
                        let b = &self.boardings[j];
                        let tz_prev = self.timezone.utc_offset(prev_period.begin_time)?;
                        let t_board = prev_period.datum_midnight(tz_prev) + b.depart;
                        log::debug!(
                            target: "triphop_graph::trip_board",
                            "boarding resolved from yesterday's overage tail at {t_board}"
                        );
                        return Some((t_board, b));
                    }
                }
            }
        }

        // Step 4, second clause: roll forward to the next service day.
        match self.calendar.next_period_with_service(resolved_idx + 1, self.service_id) {
            Some((_, next_period)) => {
                let b = self.boardings.first()?;
                let tz_next = self.timezone.utc_offset(next_period.begin_time).unwrap_or(tz_offset);
                let t_board = next_period.datum_midnight(tz_next) + b.depart;
                log::debug!(
                    target: "triphop_graph::trip_board",
                    "boarding rolled to next service day at {t_board}"
                );
                Some((t_board, b))
            }
            None => {
                log::warn!(
                    target: "triphop_graph::trip_board",
                    "next-boarding search exhausted its horizon from t={t}"
                );
                None
            }
        }
    }
}

impl<E: Copy> WalkableEdge<E> for TripBoard {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let (t_board, boarding) = self.find_board(state.time)?;
        let wait = (t_board - state.time) as f64;
        let mut next = state.at_time(t_board, wait + options.transfer_penalty);
        next.num_transfers += 1;
        next.trip_id = Some(boarding.trip_id.clone());
        next.stop_sequence = Some(boarding.stop_sequence);
        Some(next)
    }

    /// Disboarding without cost (§4.8): clears trip context, leaves `time`
    /// untouched, and decrements `num_transfers`.
    fn walk_back(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let mut next = state.without_trip();
        next.num_transfers = next.num_transfers.saturating_sub(1);
        Some(next)
    }
}
