//! A piecewise-constant map from absolute wall-clock seconds to the set of
//! `service_id`s active that day — typically one calendar day of local time
//! projected onto absolute seconds.
//!
//! Mirrors [`crate::timezone::Timezone`]'s ordered-sequence-plus-binary-search
//! shape (Design Note 9.2), but additionally supports "next/previous period
//! that still carries a given service" lookups, which the next-boarding
//! search of `TripBoard`/`TripAlight`/`HeadwayBoard`/`HeadwayAlight` needs
//! when a service doesn't run every day (weekday-only routes, holidays).

use triphop_core::{CoreError, CoreResult, ServiceId, SECONDS_PER_DAY};

use crate::error::{ScheduleError, ScheduleResult};

// ── ServicePeriod ─────────────────────────────────────────────────────────────

/// One calendar day's worth of active services.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServicePeriod {
    pub begin_time: i64,
    pub end_time: i64,
    pub service_ids: Vec<ServiceId>,
}

impl ServicePeriod {
    pub fn new(begin_time: i64, end_time: i64, service_ids: Vec<ServiceId>) -> CoreResult<Self> {
        if end_time < begin_time {
            return Err(CoreError::InvertedPeriod {
                begin: begin_time,
                end: end_time,
            });
        }
        Ok(ServicePeriod {
            begin_time,
            end_time,
            service_ids,
        })
    }

    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.begin_time <= t && t <= self.end_time
    }

    #[inline]
    pub fn has_service(&self, service_id: ServiceId) -> bool {
        self.service_ids.contains(&service_id)
    }

    /// The most recent local midnight at or before `begin_time`, in absolute
    /// seconds, given the UTC offset in effect (§3.3).
    pub fn datum_midnight(&self, tz_offset: i32) -> i64 {
        let local = self.begin_time + tz_offset as i64;
        let local_midnight = local.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY;
        local_midnight - tz_offset as i64
    }

    /// Seconds since this period's datum midnight. May legitimately exceed
    /// `86400` for a time that falls in the post-midnight overage of a
    /// schedule that runs past local midnight (§6.3).
    pub fn normalize_time(&self, tz_offset: i32, t: i64) -> i64 {
        t - self.datum_midnight(tz_offset)
    }
}

// ── ServiceCalendar ───────────────────────────────────────────────────────────

/// An ordered, non-overlapping, strictly-increasing-by-`begin_time` sequence
/// of [`ServicePeriod`]s.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCalendar {
    periods: Vec<ServicePeriod>,
}

impl ServiceCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a period. Periods must be added in increasing, non-overlapping
    /// `begin_time` order (§3.3's invariant).
    pub fn add_period(&mut self, period: ServicePeriod) -> ScheduleResult<()> {
        if let Some(last) = self.periods.last() {
            if period.begin_time <= last.end_time {
                return Err(ScheduleError::Core(CoreError::OverlappingPeriods {
                    prev_end: last.end_time,
                    begin: period.begin_time,
                }));
            }
        }
        self.periods.push(period);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn period_at(&self, idx: usize) -> Option<&ServicePeriod> {
        self.periods.get(idx)
    }

    /// Index of the first period whose `end_time >= t`, i.e. the period "of
    /// or after" `t`. `None` if every period ends before `t`.
    pub fn index_of_or_after(&self, t: i64) -> Option<usize> {
        let idx = self.periods.partition_point(|p| p.end_time < t);
        if idx < self.periods.len() {
            Some(idx)
        } else {
            None
        }
    }

    /// Index of the last period whose `begin_time <= t`, i.e. the period "of
    /// or before" `t`. `None` if every period begins after `t`.
    pub fn index_of_or_before(&self, t: i64) -> Option<usize> {
        let idx = self.periods.partition_point(|p| p.begin_time <= t);
        if idx == 0 {
            None
        } else {
            Some(idx - 1)
        }
    }

    /// First period whose `end_time >= t` (§3.3).
    pub fn period_of_or_after(&self, t: i64) -> Option<&ServicePeriod> {
        self.index_of_or_after(t).map(|i| &self.periods[i])
    }

    /// Last period whose `begin_time <= t` (§3.3).
    pub fn period_of_or_before(&self, t: i64) -> Option<&ServicePeriod> {
        self.index_of_or_before(t).map(|i| &self.periods[i])
    }

    /// Starting at index `from_idx` (inclusive) and scanning forward, the
    /// first period that carries `service_id`.
    ///
    /// Used by the next-boarding search (§4.8 step 1) to skip service-free
    /// calendar days (e.g. weekday routes skipping a weekend).
    pub fn next_period_with_service(
        &self,
        from_idx: usize,
        service_id: ServiceId,
    ) -> Option<(usize, &ServicePeriod)> {
        let offset = self
            .periods
            .get(from_idx..)?
            .iter()
            .position(|p| p.has_service(service_id))?;
        if offset > 0 {
            log::debug!(
                target: "triphop_schedule::calendar",
                "widened forward search from index {from_idx} by {offset} period(s) to find service {service_id}"
            );
        }
        Some((from_idx + offset, &self.periods[from_idx + offset]))
    }

    /// Starting at index `up_to_idx` (inclusive) and scanning backward, the
    /// last period that carries `service_id`.
    ///
    /// Used by the overage rollback of §4.8 step 4 ("a service yesterday
    /// whose post-midnight tail still covers `state.time`") and by
    /// `TripAlight`'s reverse-time equivalent.
    pub fn prev_period_with_service(
        &self,
        up_to_idx: usize,
        service_id: ServiceId,
    ) -> Option<(usize, &ServicePeriod)> {
        let (idx, period) = self
            .periods
            .get(..=up_to_idx)?
            .iter()
            .enumerate()
            .rev()
            .find(|(_, p)| p.has_service(service_id))?;
        if idx < up_to_idx {
            log::debug!(
                target: "triphop_schedule::calendar",
                "widened backward search from index {up_to_idx} to index {idx} to find service {service_id}"
            );
        }
        Some((idx, period))
    }
}
