//! §4.9 — the mirror of `TripBoard` keyed on arrival times.
//!
//! Design Note 9.7: the original source declares this twice, as `alight.h`
//! and `tripalight.h`, with overlapping type names. This crate ships one
//! logical type, `TripAlight`.

use std::sync::Arc;

use triphop_core::{CoreError, ServiceId, TripId, SECONDS_PER_DAY};
use triphop_schedule::{ScheduleError, ServiceCalendar, Timezone};

use crate::driver::WalkableEdge;
use crate::error::{GraphError, GraphResult};
use crate::options::WalkOptions;
use crate::state::State;

/// One alighting opportunity: a trip, its arrival time-of-day, and its
/// ordinal stop along that trip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alighting {
    pub trip_id: TripId,
    /// Seconds since local midnight; may exceed 86400 for a trip that
    /// arrives after midnight, conceptually belonging to the previous
    /// service day (§4.9).
    pub arrive: i64,
    pub stop_sequence: u32,
}

/// A sorted-by-`arrive` schedule of alightings at one stop for one
/// `service_id`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripAlight {
    alightings: Vec<Alighting>,
    pub service_id: ServiceId,
    pub calendar: Arc<ServiceCalendar>,
    pub timezone: Arc<Timezone>,
    pub agency: String,
    overage: i64,
}

impl TripAlight {
    pub fn new(
        trip_ids: Vec<TripId>,
        arrives: Vec<i64>,
        stop_sequences: Vec<u32>,
        service_id: ServiceId,
        calendar: Arc<ServiceCalendar>,
        timezone: Arc<Timezone>,
        agency: impl Into<String>,
    ) -> GraphResult<Self> {
        if trip_ids.len() != arrives.len() || arrives.len() != stop_sequences.len() {
            return Err(GraphError::MismatchedBoardingArrays {
                trip_ids: trip_ids.len(),
                departs: arrives.len(),
                stop_sequences: stop_sequences.len(),
            });
        }
        if arrives.is_empty() {
            return Err(GraphError::Schedule(ScheduleError::Core(CoreError::EmptySchedule {
                len: 0,
            })));
        }
        for (i, window) in arrives.windows(2).enumerate() {
            if window[1] < window[0] {
                return Err(GraphError::UnsortedBoardingArray { index: i + 1 });
            }
        }

        let overage = arrives
            .iter()
            .map(|&a| a - SECONDS_PER_DAY)
            .filter(|&o| o >= 0)
            .max()
            .unwrap_or(-1);

        let alightings = trip_ids
            .into_iter()
            .zip(arrives)
            .zip(stop_sequences)
            .map(|((trip_id, arrive), stop_sequence)| Alighting {
                trip_id,
                arrive,
                stop_sequence,
            })
            .collect();

        Ok(TripAlight {
            alightings,
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

    pub fn alightings(&self) -> &[Alighting] {
        &self.alightings
    }

    /// The latest-arrival search of §4.9: the largest `i` with
    /// `arrive[i] <= now_tod`, i.e. the most recent trip that would have
    /// deposited a traveler here no later than `t`.
    fn find_alight(&self, t: i64) -> Option<(i64, &Alighting)> {
        let period_idx = self.calendar.index_of_or_before(t)?;
        let mut resolved_idx = period_idx;
        let mut period = self.calendar.period_at(period_idx)?;
        if !period.has_service(self.service_id) {
            let (idx, p) = self.calendar.prev_period_with_service(period_idx, self.service_id)?;
            resolved_idx = idx;
            period = p;
        }

        let tz_offset = self.timezone.utc_offset(t)?;
        let now_tod = period.normalize_time(tz_offset, t);

        let count = self.alightings.partition_point(|a| a.arrive <= now_tod);
        if count > 0 {
            let a = &self.alightings[count - 1];
            let t_alight = period.datum_midnight(tz_offset) + a.arrive;
            return Some((t_alight, a));
        }

        // Mirror of TripBoard's rare "yesterday overage" branch: today's
        // earliest arrival might actually belong to tomorrow's overage
        // window projected backward.
        if self.overage >= 0 {
            if let Some((next_idx, next_period)) =
                self.calendar.next_period_with_service(resolved_idx + 1, self.service_id)
            {
                if next_idx == resolved_idx + 1 {
                    let shifted_target = now_tod - SECONDS_PER_DAY;
                    let j = self.alightings.partition_point(|a| a.arrive <= shifted_target);
                    if j > 0 {
                        let a = &self.alightings[j - 1];
                        let tz_next = self.timezone.utc_offset(next_period.begin_time)?;
                        let t_alight = next_period.datum_midnight(tz_next) + a.arrive;
                        log::debug!(
                            target: "triphop_graph::trip_alight",
                            "alighting resolved from tomorrow's overage tail at {t_alight}"
                        );
                        return Some((t_alight, a));
                    }
                }
            }
        }

        match self.calendar.prev_period_with_service(resolved_idx.checked_sub(1)?, self.service_id) {
            Some((_, prev_period)) => {
                let a = self.alightings.last()?;
                let tz_prev = self.timezone.utc_offset(prev_period.begin_time).unwrap_or(tz_offset);
                let t_alight = prev_period.datum_midnight(tz_prev) + a.arrive;
                log::debug!(
                    target: "triphop_graph::trip_alight",
                    "alighting rolled to previous service day at {t_alight}"
                );
                Some((t_alight, a))
            }
            None => {
                log::warn!(
                    target: "triphop_graph::trip_alight",
                    "latest-arrival search exhausted its horizon from t={t}"
                );
                None
            }
        }
    }
}

impl<E: Copy> WalkableEdge<E> for TripAlight {
    /// No-cost trip-clear (§4.9): the mirror of `TripBoard::walk_back`.
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let mut next = state.without_trip();
        next.num_transfers = next.num_transfers.saturating_sub(1);
        Some(next)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let (t_alight, alighting) = self.find_alight(state.time)?;
        let cost = (state.time - t_alight) as f64;
        let mut next = state.at_time(t_alight, cost + options.transfer_penalty);
        next.num_transfers += 1;
        next.trip_id = Some(alighting.trip_id.clone());
        next.stop_sequence = Some(alighting.stop_sequence);
        Some(next)
    }
}
