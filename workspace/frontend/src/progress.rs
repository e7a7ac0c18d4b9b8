//! Synthetic progress for report generation.
//!
//! The API reports no real progress, so the bar is a timed animation between
//! fixed checkpoints. Network milestones pick the next checkpoints; the clock
//! is passed in by the caller, which keeps the animation independent of any
//! timer implementation.

use std::collections::VecDeque;
use std::time::Duration;

pub const GENERATING_MESSAGE: &str = "Generating your report... Please wait.";
pub const RECEIVING_MESSAGE: &str = "Receiving your report...";
pub const FINISHING_MESSAGE: &str = "Preparing your download...";

const SHORT: Duration = Duration::from_millis(300);
const LONG: Duration = Duration::from_millis(1500);

/// Network events that move the animation forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Submitted,
    HeadersReceived,
    BodyReceived,
}

impl Milestone {
    /// Checkpoints animated after this milestone, with the time each takes.
    fn checkpoints(self) -> &'static [(f64, Duration)] {
        match self {
            Milestone::Submitted => &[(20.0, SHORT), (40.0, LONG)],
            Milestone::HeadersReceived => &[(70.0, SHORT), (90.0, LONG)],
            Milestone::BodyReceived => &[(100.0, SHORT)],
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Milestone::Submitted => GENERATING_MESSAGE,
            Milestone::HeadersReceived => RECEIVING_MESSAGE,
            Milestone::BodyReceived => FINISHING_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    from: f64,
    to: f64,
    started: Duration,
    length: Duration,
}

impl Segment {
    fn value_at(&self, now: Duration) -> f64 {
        if self.length.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started).as_nanos() as f64;
        let fraction = (elapsed / self.length.as_nanos() as f64).min(1.0);
        self.from + (self.to - self.from) * fraction
    }

    fn end(&self) -> Duration {
        self.started + self.length
    }
}

/// Monotonic, time-driven progress from 0 to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimation {
    value: f64,
    current: Option<Segment>,
    pending: VecDeque<(f64, Duration)>,
    milestone: Option<Milestone>,
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            current: None,
            pending: VecDeque::new(),
            milestone: None,
        }
    }

    /// Record a milestone at `now`.
    ///
    /// Whatever phase is running is cut short at its current value and the
    /// milestone's checkpoints start from there. Checkpoints already passed
    /// are skipped, so the value never moves backwards.
    pub fn reach(&mut self, milestone: Milestone, now: Duration) {
        self.advance(now);
        log::trace!("Progress milestone {:?} at {:.1}%", milestone, self.value);

        self.current = None;
        self.pending = milestone
            .checkpoints()
            .iter()
            .copied()
            .filter(|(target, _)| *target > self.value)
            .collect();
        self.milestone = Some(milestone);
        self.start_next(now);
    }

    /// Move the animation to `now` and return the whole percentage shown.
    pub fn advance(&mut self, now: Duration) -> u8 {
        while let Some(segment) = &self.current {
            if now < segment.end() {
                self.value = self.value.max(segment.value_at(now));
                break;
            }
            self.value = self.value.max(segment.to);
            let finished_at = segment.end();
            self.current = None;
            self.start_next(finished_at);
        }
        self.percent()
    }

    /// Whole percentage reached so far. Exactly 100 only once the final
    /// checkpoint has been animated to.
    pub fn percent(&self) -> u8 {
        self.value.floor().clamp(0.0, 100.0) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.percent() == 100
    }

    /// Status line for the phase in progress.
    pub fn message(&self) -> &'static str {
        self.milestone.map(Milestone::message).unwrap_or(GENERATING_MESSAGE)
    }

    fn start_next(&mut self, at: Duration) {
        if let Some((target, length)) = self.pending.pop_front() {
            self.current = Some(Segment {
                from: self.value,
                to: target,
                started: at,
                length,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_idle_animation_stays_at_zero() {
        let mut progress = ProgressAnimation::new();
        assert_eq!(progress.advance(ms(10_000)), 0);
        assert_eq!(progress.message(), GENERATING_MESSAGE);
    }

    #[test]
    fn test_submitted_phase_checkpoints() {
        let mut progress = ProgressAnimation::new();
        progress.reach(Milestone::Submitted, ms(0));

        assert_eq!(progress.advance(ms(150)), 10);
        assert_eq!(progress.advance(ms(300)), 20);
        assert_eq!(progress.advance(ms(1050)), 30);
        assert_eq!(progress.advance(ms(60_000)), 40);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_early_headers_cut_phase_short() {
        let mut progress = ProgressAnimation::new();
        progress.reach(Milestone::Submitted, ms(0));
        assert_eq!(progress.advance(ms(150)), 10);

        progress.reach(Milestone::HeadersReceived, ms(150));
        assert_eq!(progress.percent(), 10);
        assert_eq!(progress.message(), RECEIVING_MESSAGE);

        assert_eq!(progress.advance(ms(450)), 70);
        assert_eq!(progress.advance(ms(5_000)), 90);
    }

    #[test]
    fn test_body_completes_at_exactly_one_hundred() {
        let mut progress = ProgressAnimation::new();
        progress.reach(Milestone::Submitted, ms(0));
        progress.reach(Milestone::HeadersReceived, ms(100));
        progress.reach(Milestone::BodyReceived, ms(200));

        assert!(progress.advance(ms(350)) < 100);
        assert!(!progress.is_complete());
        assert_eq!(progress.advance(ms(500)), 100);
        assert!(progress.is_complete());
        assert_eq!(progress.advance(ms(9_000)), 100);
    }

    #[test]
    fn test_late_milestone_never_moves_backwards() {
        let mut progress = ProgressAnimation::new();
        progress.reach(Milestone::HeadersReceived, ms(0));
        assert_eq!(progress.advance(ms(5_000)), 90);

        progress.reach(Milestone::Submitted, ms(5_000));
        assert_eq!(progress.advance(ms(10_000)), 90);
    }

    #[test]
    fn test_progress_is_monotonic_across_a_whole_run() {
        let mut progress = ProgressAnimation::new();
        let mut last = 0;

        for tick in 0..200u64 {
            let now = ms(tick * 50);
            match tick {
                0 => progress.reach(Milestone::Submitted, now),
                13 => progress.reach(Milestone::HeadersReceived, now),
                21 => progress.reach(Milestone::BodyReceived, now),
                _ => {}
            }
            let value = progress.advance(now);
            assert!(value >= last, "progress went from {} to {} at tick {}", last, value, tick);
            last = value;
        }

        assert_eq!(last, 100);
    }

    proptest! {
        #[test]
        fn progress_never_decreases_for_any_milestone_timing(
            headers_at in 0u64..5_000,
            body_after in 0u64..5_000,
            step in 1u64..400,
        ) {
            let mut progress = ProgressAnimation::new();
            progress.reach(Milestone::Submitted, ms(0));
            let body_at = headers_at + body_after;
            let mut last = 0;
            let mut now = 0;

            while now <= body_at + 1_000 {
                if now >= headers_at && progress.message() == GENERATING_MESSAGE {
                    progress.reach(Milestone::HeadersReceived, ms(now));
                }
                if now >= body_at && progress.message() == RECEIVING_MESSAGE {
                    progress.reach(Milestone::BodyReceived, ms(now));
                }
                let value = progress.advance(ms(now));
                prop_assert!(value >= last);
                prop_assert!(value <= 100);
                last = value;
                now += step;
            }
        }
    }
}
