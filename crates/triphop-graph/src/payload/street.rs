//! §4.2 — a walkable road segment.

use crate::driver::WalkableEdge;
use crate::options::WalkOptions;
use crate::state::State;

/// A walkable road segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    pub name: String,
    /// Length in meters.
    pub length: f64,
    /// Meters of elevation gained along forward traversal.
    pub rise: f64,
    /// Meters of elevation lost along forward traversal.
    pub fall: f64,
    /// Per-edge difficulty multiplier.
    pub slog: f64,
    /// Way-id used for turn-penalty detection.
    pub way: u64,
}

impl Street {
    pub fn new(
        name: impl Into<String>,
        length: f64,
        rise: f64,
        fall: f64,
        slog: f64,
        way: u64,
    ) -> Self {
        Street {
            name: name.into(),
            length,
            rise,
            fall,
            slog,
            way,
        }
    }

    /// Time and weight increment shared by `walk`/`walk_back`, parameterized
    /// by which direction's rise/fall applies (walk-back swaps them, §4.2).
    fn traverse(&self, rise: f64, fall: f64, dist_walked: f64, options: &WalkOptions) -> Option<(f64, f64)> {
        if dist_walked + self.length > options.max_walk {
            return None;
        }

        let base_time = self.length / options.walking_speed;
        let elevation_time = (rise * options.uphill_slowness - fall * options.downhill_fastness)
            .max(-base_time);
        let time = base_time + elevation_time;

        let mut weight =
            time * options.walking_reluctance * (1.0 + self.slog * options.hill_reluctance);
        let overage_meters =
            (dist_walked + self.length - options.walking_overage_threshold).max(0.0);
        weight += overage_meters * options.walking_overage;

        Some((time, weight))
    }

    fn turn_penalty(&self, last_way: Option<u64>, options: &WalkOptions) -> f64 {
        match last_way {
            Some(way) if way != self.way => options.turn_penalty,
            _ => 0.0,
        }
    }
}

impl<E: Copy> WalkableEdge<E> for Street {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let (time, mut weight) = self.traverse(self.rise, self.fall, state.dist_walked, options)?;
        weight += self.turn_penalty(state.last_way, options);

        let mut next = state.at_time(state.time + time.round() as i64, weight);
        next.dist_walked += self.length;
        next.last_way = Some(self.way);
        Some(next)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        let (time, mut weight) = self.traverse(self.fall, self.rise, state.dist_walked, options)?;
        weight += self.turn_penalty(state.last_way, options);

        let mut next = state.at_time(state.time - time.round() as i64, weight);
        next.dist_walked += self.length;
        next.last_way = Some(self.way);
        Some(next)
    }
}
