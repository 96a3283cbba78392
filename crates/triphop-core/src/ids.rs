//! Identifiers used across the scheduling and payload layers.

use std::fmt;
use std::sync::Arc;

// ── ServiceId ─────────────────────────────────────────────────────────────────

/// Identifies a GTFS-style service calendar entry (a subset of trips that run
/// on certain days, e.g. weekday/weekend/holiday).
///
/// The distinguished value [`ServiceId::NONE`] (`-1`) means "no service" —
/// boardings/alightings tagged with it never match any calendar period.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceId(pub i32);

impl ServiceId {
    /// Sentinel meaning "no service" (§6.3).
    pub const NONE: ServiceId = ServiceId(-1);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for ServiceId {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "ServiceId(none)")
        } else {
            write!(f, "ServiceId({})", self.0)
        }
    }
}

// ── TripId ────────────────────────────────────────────────────────────────────

/// Identifies a single scheduled vehicle run.
///
/// Backed by `Arc<str>` rather than `String` so cloning a `State` (which
/// happens on every `walk`/`walk_back` call while a trip is boarded) is a
/// refcount bump, not a heap allocation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripId(Arc<str>);

impl TripId {
    pub fn new(id: impl AsRef<str>) -> Self {
        TripId(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TripId {
    fn from(s: &str) -> Self {
        TripId::new(s)
    }
}

impl From<String> for TripId {
    fn from(s: String) -> Self {
        TripId(Arc::from(s))
    }
}

impl AsRef<str> for TripId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
