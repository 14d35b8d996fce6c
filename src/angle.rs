//! Orbit angles in degrees.
//!
//! 0° is the positive horizontal axis through the orbit center (3 o'clock)
//! and angles increase clockwise, matching Y-down screen coordinates.

use floem::kurbo::Point;

use crate::calendar;
use crate::date::CalendarDate;

/// Degrees in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct OrbitAngle(f64);

impl OrbitAngle {
    pub const FULL_TURN: f64 = 360.0;
    pub const HALF_TURN: f64 = 180.0;

    /// Wraps any finite value into `[0, 360)`.
    pub fn new(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(Self::FULL_TURN);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= Self::FULL_TURN {
            Self(0.0)
        } else {
            Self(wrapped)
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Angle of `pointer` as seen from `center`.
    ///
    /// A pointer exactly on the center yields 0°.
    pub fn from_pointer(pointer: Point, center: Point) -> Self {
        let dx = pointer.x - center.x;
        let dy = pointer.y - center.y;
        Self::new(dy.atan2(dx).to_degrees())
    }

    /// Where `date` sits on the orbit: `((day_of_year - 1) / days_in_year) * 360`.
    pub fn for_date(date: &CalendarDate) -> Self {
        let day = calendar::day_of_year(date);
        let days = calendar::days_in_year(date.year());
        Self::new(f64::from(day - 1) / f64::from(days) * Self::FULL_TURN)
    }

    /// Shortest signed turn from `self` to `to`, in `(-180, 180]`.
    ///
    /// Crossing the 0°/360° seam gives the small step, not a ±360° jump:
    /// 359° → 2° is +3°.
    pub fn delta_to(self, to: OrbitAngle) -> f64 {
        let diff = (to.0 - self.0).rem_euclid(Self::FULL_TURN);
        if diff > Self::HALF_TURN {
            diff - Self::FULL_TURN
        } else {
            diff
        }
    }
}
