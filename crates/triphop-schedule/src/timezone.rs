//! A piecewise-constant map from absolute wall-clock seconds to UTC offset.
//!
//! A real-world timezone is not a single offset: DST transitions split the
//! timeline into contiguous, non-overlapping [`TimezonePeriod`]s, each valid
//! for a `[begin_time, end_time]` range and carrying a constant
//! `utc_offset`. [`Timezone`] is the ordered sequence of those periods.

use triphop_core::{CoreError, CoreResult, SECONDS_PER_DAY};

use crate::error::{ScheduleError, ScheduleResult};

// ── TimezonePeriod ────────────────────────────────────────────────────────────

/// One constant-offset stretch of a [`Timezone`].
///
/// `[begin_time, end_time]` is inclusive on both ends, matching the original
/// core's convention (a query exactly at `end_time` still resolves to this
/// period).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimezonePeriod {
    pub begin_time: i64,
    pub end_time: i64,
    /// Seconds east of UTC (negative for west).
    pub utc_offset: i32,
}

impl TimezonePeriod {
    pub fn new(begin_time: i64, end_time: i64, utc_offset: i32) -> CoreResult<Self> {
        if end_time < begin_time {
            return Err(CoreError::InvertedPeriod {
                begin: begin_time,
                end: end_time,
            });
        }
        Ok(TimezonePeriod {
            begin_time,
            end_time,
            utc_offset,
        })
    }

    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.begin_time <= t && t <= self.end_time
    }

    /// The most recent local midnight at or before `t`, expressed in
    /// absolute (non-local) seconds.
    pub fn datum_midnight(&self, t: i64) -> i64 {
        let local = t + self.utc_offset as i64;
        let local_midnight = local.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY;
        local_midnight - self.utc_offset as i64
    }

    /// Seconds elapsed since the local midnight of or before `t` (§4.5).
    pub fn time_since_midnight(&self, t: i64) -> i64 {
        t - self.datum_midnight(t)
    }
}

// ── Timezone ──────────────────────────────────────────────────────────────────

/// An ordered, non-overlapping sequence of [`TimezonePeriod`]s.
///
/// Invariant: for any queried `t` in the covered range, exactly one period
/// matches; outside the covered range, lookups return `None` (§3.3).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timezone {
    periods: Vec<TimezonePeriod>,
}

impl Timezone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a period. Periods must be added in increasing, non-overlapping
    /// `begin_time` order — the usual case when building from a timezone
    /// database that already emits transitions chronologically.
    pub fn add_period(&mut self, period: TimezonePeriod) -> ScheduleResult<()> {
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

    /// The period covering `t`, if any.
    pub fn period_of(&self, t: i64) -> Option<&TimezonePeriod> {
        let idx = self.periods.partition_point(|p| p.end_time < t);
        self.periods.get(idx).filter(|p| p.contains(t))
    }

    /// UTC offset in effect at `t` (§3.3).
    pub fn utc_offset(&self, t: i64) -> Option<i32> {
        self.period_of(t).map(|p| p.utc_offset)
    }

    /// Seconds since local midnight at `t` (§4.5), or `None` if `t` falls
    /// outside every period.
    pub fn time_since_midnight(&self, t: i64) -> Option<i64> {
        self.period_of(t).map(|p| p.time_since_midnight(t))
    }

    /// The most recent local midnight at or before `t`, in absolute seconds.
    pub fn datum_midnight(&self, t: i64) -> Option<i64> {
        self.period_of(t).map(|p| p.datum_midnight(t))
    }
}
