//! §4.11 — the reverse-time analog of `HeadwayBoard`.

use std::sync::Arc;

use triphop_core::{ServiceId, TripId};
use triphop_schedule::{ServiceCalendar, ServicePeriod, Timezone};

use crate::driver::WalkableEdge;
use crate::error::{GraphError, GraphResult};
use crate::options::{HeadwayWaitPolicy, WalkOptions};
use crate::state::State;

/// A trip running every `headway_secs` between `start_time` and `end_time`
/// on days carrying `service_id`, consulted from the alighting side
/// (§4.11): the principal operation is `walk_back`, producing the latest
/// trip that could have deposited a traveler here by `state.time`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadwayAlight {
    pub start_time: i64,
    pub end_time: i64,
    pub headway_secs: i64,
    pub trip_id: TripId,
    pub service_id: ServiceId,
    pub calendar: Arc<ServiceCalendar>,
    pub timezone: Arc<Timezone>,
}

impl HeadwayAlight {
    pub fn new(
        start_time: i64,
        end_time: i64,
        headway_secs: i64,
        trip_id: TripId,
        service_id: ServiceId,
        calendar: Arc<ServiceCalendar>,
        timezone: Arc<Timezone>,
    ) -> GraphResult<Self> {
        if end_time < start_time {
            return Err(GraphError::InvertedHeadwayWindow { start_time, end_time });
        }
        if headway_secs <= 0 {
            return Err(GraphError::NonPositiveHeadway(headway_secs));
        }
        Ok(HeadwayAlight {
            start_time,
            end_time,
            headway_secs,
            trip_id,
            service_id,
            calendar,
            timezone,
        })
    }

    fn resolve_period(&self, t: i64) -> Option<(usize, &ServicePeriod)> {
        let period_idx = self.calendar.index_of_or_before(t)?;
        let period = self.calendar.period_at(period_idx)?;
        if period.has_service(self.service_id) {
            Some((period_idx, period))
        } else {
            self.calendar.prev_period_with_service(period_idx, self.service_id)
        }
    }

    fn wait_offset(&self, now_tod: i64, policy: HeadwayWaitPolicy) -> i64 {
        match policy {
            HeadwayWaitPolicy::Instant => now_tod,
            HeadwayWaitPolicy::HalfHeadway => now_tod - self.headway_secs / 2,
            HeadwayWaitPolicy::FullHeadway => now_tod - self.headway_secs,
        }
    }
}

impl<E: Copy> WalkableEdge<E> for HeadwayAlight {
    /// No-cost trip-clear, mirroring `TripAlight::walk`.
    fn walk(&self, state: &State<E>, _options: &WalkOptions) -> Option<State<E>> {
        let mut next = state.without_trip();
        next.num_transfers = next.num_transfers.saturating_sub(1);
        Some(next)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let (resolved_idx, period) = self.resolve_period(state.time)?;
        let tz_offset = self.timezone.utc_offset(state.time)?;
        let now_tod = period.normalize_time(tz_offset, state.time);

        let (alight_tod, alight_period) = if now_tod > self.end_time {
            (self.end_time, period)
        } else if now_tod >= self.start_time {
            (self.wait_offset(now_tod, options.headway_wait_policy), period)
        } else {
            let (_, prev_period) = self
                .calendar
                .prev_period_with_service(resolved_idx.checked_sub(1)?, self.service_id)?;
            (self.end_time, prev_period)
        };

        let tz_alight = self.timezone.utc_offset(alight_period.begin_time).unwrap_or(tz_offset);
        let t_alight = alight_period.datum_midnight(tz_alight) + alight_tod;
        let cost = (state.time - t_alight) as f64;

        let mut next = state.at_time(t_alight, cost + options.transfer_penalty);
        next.num_transfers += 1;
        next.trip_id = Some(self.trip_id.clone());
        next.stop_sequence = None;
        Some(next)
    }
}
