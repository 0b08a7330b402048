//! Frame pacing.

use std::thread::sleep;
use std::time::{Duration, Instant};

use log::debug;

/// Keeps the main loop at a fixed frame rate by sleeping after each frame
/// for whatever is left of the frame's time budget.
///
/// Frames that take longer than the budget are not compensated for: there
/// is no catching up and no frame skipping.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pacer {
    /// The time budget of a single frame.
    pub budget: Duration,
}

impl Pacer {
    /// Returns a pacer targeting `fps` frames per second.
    ///
    /// The budget is a whole number of milliseconds, rounded down.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use boing_front::pace::Pacer;
    ///
    /// assert_eq!(Pacer::from_fps(60).budget, Duration::from_millis(16));
    /// ```
    pub fn from_fps(fps: u32) -> Self {
        let ms = 1000 / fps.max(1);
        Self { budget: Duration::from_millis(ms.into()) }
    }

    /// Returns how much of the budget is left after `elapsed`, or `None`
    /// if the frame overran its budget.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed)
    }

    /// Sleeps until the budget of the frame started at `start` is used up.
    ///
    /// Returns whether the frame overran its budget.
    pub fn wait(&self, start: Instant) -> bool {
        let elapsed = start.elapsed();
        match self.remaining(elapsed) {
            Some(left) => {
                if !left.is_zero() {
                    sleep(left);
                }
                false
            }
            None => {
                debug!("frame overran its budget: {elapsed:?} > {:?}", self.budget);
                true
            }
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_fps(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_whole_millis() {
        assert_eq!(Pacer::from_fps(60).budget, Duration::from_millis(16));
        assert_eq!(Pacer::from_fps(50).budget, Duration::from_millis(20));
        assert_eq!(Pacer::from_fps(1000).budget, Duration::from_millis(1));
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        assert_eq!(Pacer::from_fps(0).budget, Duration::from_secs(1));
    }

    #[test]
    fn remaining_time() {
        let p = Pacer::default();
        assert_eq!(
            p.remaining(Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(p.remaining(Duration::ZERO), Some(p.budget));
        assert_eq!(p.remaining(p.budget), Some(Duration::ZERO));
    }

    #[test]
    fn overrun_has_no_remaining_time() {
        let p = Pacer::default();
        assert_eq!(p.remaining(Duration::from_millis(17)), None);
        assert_eq!(p.remaining(Duration::from_secs(1)), None);
    }

    #[test]
    fn wait_sleeps_until_budget_used() {
        let p = Pacer::from_fps(200);
        let start = Instant::now();
        p.wait(start);
        assert!(start.elapsed() >= p.budget);
    }

    #[test]
    fn wait_reports_overrun() {
        let p = Pacer::from_fps(1000);
        let start = Instant::now() - Duration::from_millis(10);
        assert!(p.wait(start));
    }
}
