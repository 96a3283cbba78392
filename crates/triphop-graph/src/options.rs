//! Traversal tuning parameters (§3.2) — the sole configuration surface of
//! this crate (§4.16); there is no file-based config layer.

/// How `HeadwayBoard`/`HeadwayAlight` charge the wait when the traveler
/// arrives inside the service window, where the source schedule does not
/// pin down a single answer (Design Note 9.3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadwayWaitPolicy {
    /// Board immediately at `now_tod`; the wait for the next physical
    /// vehicle is not reflected in the returned time (optimistic).
    #[default]
    Instant,
    /// Board at `now_tod + headway_secs / 2`, the expected wait for a
    /// uniformly-random arrival within the headway.
    HalfHeadway,
    /// Board at `now_tod + headway_secs`, the worst-case wait.
    FullHeadway,
}

/// Immutable traversal parameters threaded through every `walk`/`walk_back`
/// call (§3.2).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkOptions {
    /// Weight added each time `num_transfers` increments.
    pub transfer_penalty: f64,
    /// Meters per second used to convert street length to time.
    pub walking_speed: f64,
    /// Weight-per-second multiplier while walking.
    pub walking_reluctance: f64,
    /// Meters above which street walking yields no successor.
    pub max_walk: f64,
    /// Weight-per-meter surcharge for distance walked above
    /// `walking_overage_threshold`.
    pub walking_overage: f64,
    /// Distance, in meters, above which `walking_overage` starts applying.
    pub walking_overage_threshold: f64,
    /// Weight added when a street edge's `way` differs from the
    /// predecessor's.
    pub turn_penalty: f64,
    /// Extra seconds of walk time per meter of elevation gained.
    pub uphill_slowness: f64,
    /// Seconds of walk time shaved per meter of elevation lost.
    pub downhill_fastness: f64,
    /// Multiplier applied to `slog` when weighting a hilly street.
    pub hill_reluctance: f64,
    /// How `HeadwayBoard`/`HeadwayAlight` charge the mid-window wait.
    pub headway_wait_policy: HeadwayWaitPolicy,
}

impl Default for WalkOptions {
    /// The original core's conventional defaults: 1 m/s walking speed, no
    /// penalties, no elevation shaping.
    fn default() -> Self {
        WalkOptions {
            transfer_penalty: 0.0,
            walking_speed: 1.0,
            walking_reluctance: 1.0,
            max_walk: f64::INFINITY,
            walking_overage: 0.0,
            walking_overage_threshold: f64::INFINITY,
            turn_penalty: 0.0,
            uphill_slowness: 0.0,
            downhill_fastness: 0.0,
            hill_reluctance: 0.0,
            headway_wait_policy: HeadwayWaitPolicy::Instant,
        }
    }
}

impl WalkOptions {
    pub fn builder() -> WalkOptionsBuilder {
        WalkOptionsBuilder::default()
    }
}

/// Builder for [`WalkOptions`], mirroring the teacher's
/// builder-then-construct shape.
#[derive(Default)]
pub struct WalkOptionsBuilder {
    options: WalkOptions,
}

macro_rules! builder_field {
    ($name:ident, $ty:ty) => {
        pub fn $name(mut self, value: $ty) -> Self {
            self.options.$name = value;
            self
        }
    };
}

impl WalkOptionsBuilder {
    builder_field!(transfer_penalty, f64);
    builder_field!(walking_speed, f64);
    builder_field!(walking_reluctance, f64);
    builder_field!(max_walk, f64);
    builder_field!(walking_overage, f64);
    builder_field!(walking_overage_threshold, f64);
    builder_field!(turn_penalty, f64);
    builder_field!(uphill_slowness, f64);
    builder_field!(downhill_fastness, f64);
    builder_field!(hill_reluctance, f64);
    builder_field!(headway_wait_policy, HeadwayWaitPolicy);

    pub fn build(self) -> WalkOptions {
        self.options
    }
}
