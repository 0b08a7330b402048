//! Frame statistics.
//!
//! [`Scene::draw`][super::scene::Scene::draw] returns the statistics of a
//! single frame; a frontend sums them over its run and reports the
//! per-frame averages when the window closes.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Counts of drawn frames and primitives, and the time spent drawing.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent drawing.
    pub time: Duration,
    /// Number of frames drawn.
    pub frames: u32,
    /// Number of frames that overran their time budget.
    pub missed: u32,

    pub polys: Throughput,
    pub lines: Throughput,
    pub pixels: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Number of items submitted for drawing and actually drawn.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Items submitted.
    pub i: usize,
    /// Items that produced output.
    pub o: usize,
}

impl Stats {
    /// Returns zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns zeroed statistics with a running timer.
    ///
    /// The timer only runs if the `std` feature is enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer, adding the elapsed time to `self.time`.
    #[must_use]
    pub fn finish(mut self) -> Self {
        #[cfg(feature = "std")]
        if let Some(st) = self.start.take() {
            self.time += st.elapsed();
        }
        self
    }

    /// Returns the average drawing time of a frame.
    pub fn time_per_frame(&self) -> Duration {
        self.time / self.frames.max(1)
    }
}

impl Throughput {
    /// Returns the average input and output per frame in `frames`.
    pub fn per_frame(&self, frames: u32) -> [f32; 2] {
        let n = frames.max(1) as f32;
        [self.i as f32 / n, self.o as f32 / n]
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { frames, missed, .. } = *self;
        writeln!(f, "{frames} frames, {missed} missed")?;
        writeln!(
            f,
            "draw time {} per frame",
            human_time(self.time_per_frame())
        )?;
        let rows = [
            ("polys", self.polys),
            ("lines", self.lines),
            ("pixels", self.pixels),
        ];
        for (label, t) in rows {
            let [i, o] = t.per_frame(frames);
            writeln!(
                f,
                "{label}: {} of {} drawn per frame",
                human_num(o),
                human_num(i)
            )?;
        }
        Ok(())
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.frames += other.frames;
        self.missed += other.missed;
        self.polys += other.polys;
        self.lines += other.lines;
        self.pixels += other.pixels;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

fn human_num(n: f32) -> String {
    if n < 1e3 {
        format!("{n:.0}")
    } else if n < 1e6 {
        format!("{:.1}k", n / 1e3)
    } else {
        format!("{:.1}M", n / 1e6)
    }
}

fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:.1}µs", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1e3)
    } else {
        format!("{secs:.2}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_of_100_frames() -> Stats {
        Stats {
            time: Duration::from_millis(150),
            frames: 100,
            missed: 3,
            polys: Throughput { i: 7300, o: 7300 },
            lines: Throughput { i: 4800, o: 4700 },
            pixels: Throughput { i: 9_650_000, o: 9_600_000 },
            ..Stats::new()
        }
    }

    #[test]
    fn report_shows_per_frame_averages() {
        assert_eq!(
            format!("{}", run_of_100_frames()),
            "100 frames, 3 missed\n\
             draw time 1.5ms per frame\n\
             polys: 73 of 73 drawn per frame\n\
             lines: 47 of 48 drawn per frame\n\
             pixels: 96.0k of 96.5k drawn per frame\n"
        );
    }

    #[test]
    fn report_of_no_frames() {
        assert_eq!(
            format!("{}", Stats::new()),
            "0 frames, 0 missed\n\
             draw time 0.0µs per frame\n\
             polys: 0 of 0 drawn per frame\n\
             lines: 0 of 0 drawn per frame\n\
             pixels: 0 of 0 drawn per frame\n"
        );
    }

    #[test]
    fn frames_accumulate() {
        let mut total = Stats::new();
        for _ in 0..3 {
            total += Stats {
                frames: 1,
                polys: Throughput { i: 73, o: 72 },
                ..Stats::new()
            };
        }
        total.missed += 1;

        assert_eq!(total.frames, 3);
        assert_eq!(total.missed, 1);
        assert_eq!(total.polys, Throughput { i: 219, o: 216 });
        assert_eq!(total.lines, Throughput::default());
    }

    #[test]
    fn time_per_frame() {
        assert_eq!(
            run_of_100_frames().time_per_frame(),
            Duration::from_micros(1500)
        );
        assert_eq!(Stats::new().time_per_frame(), Duration::ZERO);
    }

    #[test]
    fn large_numbers() {
        assert_eq!(human_num(999.0), "999");
        assert_eq!(human_num(1_500.0), "1.5k");
        assert_eq!(human_num(327_680.0), "327.7k");
        assert_eq!(human_num(2_500_000.0), "2.5M");
    }

    #[cfg(feature = "std")]
    #[test]
    fn finish_stops_the_timer() {
        let st = Stats::start().finish();
        let t = st.time;
        assert_eq!(st.finish().time, t);
    }
}
