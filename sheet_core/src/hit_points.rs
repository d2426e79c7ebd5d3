//! Hit point reconciliation
//!
//! Hit points are a `(current, max)` pair with the invariant
//! `max >= 1` and `0 <= current <= max`. Submitted values are
//! reconciled into range and the caller writes the result back.

/// A reconciled hit point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

impl HitPoints {
    /// Whether reconciling `(current, max)` changed either value
    pub fn was_corrected_from(&self, current: i32, max: i32) -> bool {
        self.current != current || self.max != max
    }

    /// Filled fraction of the HP bar (0.0 to 1.0)
    pub fn fraction(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.max as f64).clamp(0.0, 1.0)
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Clamp a submitted `(current, max)` pair into range.
///
/// Max is fixed first (anything `<= 0` becomes 1), then current is
/// clamped against the corrected max. So `(10, 0)` becomes `(1, 1)`.
pub fn reconcile_hit_points(current: i32, max: i32) -> HitPoints {
    let max = if max <= 0 { 1 } else { max };

    let current = if current > max {
        max
    } else if current < 0 {
        0
    } else {
        current
    };

    HitPoints { current, max }
}
