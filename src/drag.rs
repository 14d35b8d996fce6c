//! Orbital drag tracking: pointer angles in, dates out.
//!
//! ## Usage
//!
//! 1) On pointer-down call [`DragController::begin`] with the pointer, the orbit
//!    center, and the currently selected date.
//! 2) On each pointer-move call [`DragController::update`]; it returns a new date
//!    only when the date actually changed.
//! 3) On pointer-up call [`DragController::end`]; on touch-cancel or focus loss
//!    call [`DragController::cancel`]; when the pointer leaves the surface call
//!    [`DragController::leave`].
//!
//! ```
//! use floem::kurbo::Point;
//! use floem_orbital::{CalendarDate, DragController};
//!
//! let center = Point::new(0.0, 0.0);
//! let start = CalendarDate::from_ymd(2023, 6, 15).unwrap();
//!
//! let mut drag = DragController::default();
//! drag.begin(Point::new(100.0, 0.0), center, start);
//!
//! // A quarter turn clockwise is a quarter of 2023's 365 days.
//! let moved = drag.update(Point::new(0.0, 100.0), center, start).unwrap();
//! assert_eq!(moved, CalendarDate::from_ymd(2023, 9, 14).unwrap());
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use floem::kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::angle::OrbitAngle;
use crate::calendar;
use crate::date::CalendarDate;

/// How angular deltas are turned into a day offset across a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationStrategy {
    /// Keep the gesture-start date fixed and accumulate the total angle;
    /// the day offset is computed once per move from the total, scaled by
    /// the start year's length. One full lap is exactly one start-year.
    #[default]
    RunningTotal,
    /// Fold every delta into a fractional reference day straight away,
    /// scaled by the reference year's current length.
    Incremental,
}

/// State captured at gesture start and carried through the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    last_angle: OrbitAngle,
    reference_day: f64,
    reference_year: i32,
    total_angle: f64,
}

impl DragSession {
    /// Pointer angle seen on the previous event.
    pub fn last_angle(&self) -> OrbitAngle {
        self.last_angle
    }

    /// Fractional day-of-year the offset is applied to.
    pub fn reference_day(&self) -> f64 {
        self.reference_day
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Sum of all deltas since the gesture began.
    pub fn total_angle(&self) -> f64 {
        self.total_angle
    }

    fn new(angle: OrbitAngle, date: &CalendarDate) -> Self {
        Self {
            last_angle: angle,
            reference_day: f64::from(calendar::day_of_year(date)),
            reference_year: date.year(),
            total_angle: 0.0,
        }
    }

    /// Feeds one pointer angle; returns the (unrounded, normalized) day and year.
    fn advance(&mut self, angle: OrbitAngle, strategy: AccumulationStrategy) -> (f64, i32) {
        let diff = self.last_angle.delta_to(angle);
        self.last_angle = angle;
        self.total_angle += diff;

        match strategy {
            AccumulationStrategy::RunningTotal => {
                let days = f64::from(calendar::days_in_year(self.reference_year));
                let offset = self.total_angle / OrbitAngle::FULL_TURN * days;
                calendar::normalize_day(self.reference_day + offset, self.reference_year)
            }
            AccumulationStrategy::Incremental => {
                let days = f64::from(calendar::days_in_year(self.reference_year));
                let offset = diff / OrbitAngle::FULL_TURN * days;
                let (day, year) =
                    calendar::normalize_day(self.reference_day + offset, self.reference_year);
                self.reference_day = day;
                self.reference_year = year;
                (day, year)
            }
        }
    }
}

/// Two-state (idle/dragging) controller owned by one picker.
///
/// The controller never owns the selected date: callers pass the displayed
/// date in and decide what to do with the proposals that come back.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    strategy: AccumulationStrategy,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(strategy: AccumulationStrategy) -> Self {
        Self {
            strategy,
            session: None,
        }
    }

    pub fn strategy(&self) -> AccumulationStrategy {
        self.strategy
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts a gesture, replacing any session a lost release left behind.
    pub fn begin(&mut self, pointer: Point, center: Point, date: CalendarDate) {
        let angle = OrbitAngle::from_pointer(pointer, center);
        log::debug!(
            "orbit drag start at {:.1}° from {}",
            angle.degrees(),
            date
        );
        self.session = Some(DragSession::new(angle, &date));
    }

    /// Processes a move. Returns the new date only when it differs from
    /// `displayed`; moves without a session are ignored.
    pub fn update(
        &mut self,
        pointer: Point,
        center: Point,
        displayed: CalendarDate,
    ) -> Option<CalendarDate> {
        let session = self.session.as_mut()?;
        let angle = OrbitAngle::from_pointer(pointer, center);
        let (day, year) = session.advance(angle, self.strategy);
        let date = calendar::date_from_day_of_year(day.round() as i64, year);
        if date == displayed {
            return None;
        }
        log::trace!("orbit drag -> {date}");
        Some(date)
    }

    /// Pointer-up / touch-end.
    pub fn end(&mut self) {
        if self.session.take().is_some() {
            log::debug!("orbit drag end");
        }
    }

    /// Touch-cancel or focus loss. Same effect as [`Self::end`]: the last
    /// emitted date stands.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("orbit drag cancelled");
        }
    }

    /// Best-effort detection of the pointer leaving the window mid-drag.
    ///
    /// A leave with a related target is just the pointer crossing into
    /// another element and keeps the session. Without one the release may
    /// never arrive, so the session ends here.
    pub fn leave(&mut self, has_related_target: bool) {
        if !has_related_target {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(0.0, 0.0);

    fn at(degrees: f64) -> Point {
        let r = degrees.to_radians();
        Point::new(100.0 * r.cos(), 100.0 * r.sin())
    }

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    /// Runs a gesture over `angles` (first one is pointer-down) and returns the
    /// date the host would end up displaying plus the number of notifications.
    fn drive(
        strategy: AccumulationStrategy,
        start: CalendarDate,
        angles: &[f64],
    ) -> (CalendarDate, usize) {
        let mut drag = DragController::new(strategy);
        let mut shown = start;
        let mut notifications = 0;
        drag.begin(at(angles[0]), CENTER, shown);
        for &a in &angles[1..] {
            if let Some(d) = drag.update(at(a), CENTER, shown) {
                shown = d;
                notifications += 1;
            }
        }
        drag.end();
        (shown, notifications)
    }

    #[test]
    fn new_controller_is_idle() {
        let drag = DragController::default();
        assert!(!drag.is_dragging());
        assert!(drag.session().is_none());
        assert_eq!(drag.strategy(), AccumulationStrategy::RunningTotal);
    }

    #[test]
    fn begin_captures_reference() {
        let mut drag = DragController::default();
        drag.begin(at(90.0), CENTER, ymd(2023, 6, 15));
        let session = drag.session().unwrap();
        assert!((session.last_angle().degrees() - 90.0).abs() < 1e-9);
        assert_eq!(session.reference_day(), 166.0);
        assert_eq!(session.reference_year(), 2023);
        assert_eq!(session.total_angle(), 0.0);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut drag = DragController::default();
        assert_eq!(drag.update(at(45.0), CENTER, ymd(2023, 1, 1)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn move_after_end_is_ignored() {
        let mut drag = DragController::default();
        let start = ymd(2023, 1, 1);
        drag.begin(at(0.0), CENTER, start);
        drag.end();
        assert_eq!(drag.update(at(90.0), CENTER, start), None);
    }

    #[test]
    fn sub_day_move_emits_nothing() {
        let mut drag = DragController::default();
        let start = ymd(2023, 6, 15);
        drag.begin(at(0.0), CENTER, start);
        // 0.4° is ~0.4 days, rounds back onto the start date
        assert_eq!(drag.update(at(0.4), CENTER, start), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn seam_crossing_moves_forward() {
        let (date, _) = drive(
            AccumulationStrategy::RunningTotal,
            ymd(2023, 6, 15),
            &[350.0, 359.0, 2.0, 12.0],
        );
        // +22° of 365 days is 22.3 days
        assert_eq!(date, ymd(2023, 7, 7));
    }

    #[test]
    fn thirty_degrees_in_three_steps() {
        for strategy in [
            AccumulationStrategy::RunningTotal,
            AccumulationStrategy::Incremental,
        ] {
            let (date, notifications) =
                drive(strategy, ymd(2023, 6, 15), &[0.0, 10.0, 20.0, 30.0]);
            // day 166 + 30.4 -> day 196
            assert_eq!(date, ymd(2023, 7, 15));
            assert_eq!(notifications, 3);
        }
    }

    #[test]
    fn full_lap_advances_one_start_year() {
        let lap = [0.0, 90.0, 180.0, 270.0, 0.0];
        let (date, _) = drive(AccumulationStrategy::RunningTotal, ymd(2024, 1, 10), &lap);
        assert_eq!(date, ymd(2025, 1, 10));

        // 366 days past March 1st of a leap year is March 2nd
        let (date, _) = drive(AccumulationStrategy::RunningTotal, ymd(2024, 3, 1), &lap);
        assert_eq!(date, ymd(2025, 3, 2));

        let (date, _) = drive(AccumulationStrategy::RunningTotal, ymd(2023, 6, 15), &lap);
        assert_eq!(date, ymd(2024, 6, 14));
    }

    #[test]
    fn backward_drag_rolls_into_previous_leap_year() {
        // Jan 1 2025 back by ~1 day lands on Dec 31 2024 (day 366)
        let (date, _) = drive(AccumulationStrategy::RunningTotal, ymd(2025, 1, 1), &[0.0, -1.0]);
        assert_eq!(date, ymd(2024, 12, 31));

        let (date, _) = drive(AccumulationStrategy::Incremental, ymd(2025, 1, 1), &[0.0, -1.0]);
        assert_eq!(date, ymd(2024, 12, 31));
    }

    #[test]
    fn reverse_lap_goes_back_a_year() {
        let lap = [0.0, -90.0, -180.0, -270.0, 0.0];
        let (date, _) = drive(AccumulationStrategy::RunningTotal, ymd(2023, 1, 10), &lap);
        assert_eq!(date, ymd(2022, 1, 10));
    }

    #[test]
    fn end_cancel_and_leave() {
        let start = ymd(2023, 6, 15);
        let mut drag = DragController::default();

        drag.begin(at(0.0), CENTER, start);
        drag.cancel();
        assert!(!drag.is_dragging());

        drag.begin(at(0.0), CENTER, start);
        drag.leave(true);
        assert!(drag.is_dragging(), "leaving into another element keeps the drag");
        drag.leave(false);
        assert!(!drag.is_dragging());

        // idempotent
        drag.end();
        drag.cancel();
        drag.leave(false);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn begin_replaces_stale_session() {
        let mut drag = DragController::default();
        drag.begin(at(0.0), CENTER, ymd(2023, 6, 15));
        drag.update(at(60.0), CENTER, ymd(2023, 6, 15));
        drag.begin(at(180.0), CENTER, ymd(2020, 2, 29));
        let session = drag.session().unwrap();
        assert_eq!(session.reference_year(), 2020);
        assert_eq!(session.reference_day(), 60.0);
        assert_eq!(session.total_angle(), 0.0);
    }

    #[test]
    fn strategy_round_trips_through_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: AccumulationStrategy,
        }
        let w: Wrapper = toml::from_str("strategy = \"running_total\"").unwrap();
        assert_eq!(w.strategy, AccumulationStrategy::RunningTotal);
        let w: Wrapper = toml::from_str("strategy = \"incremental\"").unwrap();
        assert_eq!(w.strategy, AccumulationStrategy::Incremental);
    }
}
