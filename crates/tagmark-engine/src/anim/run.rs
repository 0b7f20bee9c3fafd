use std::time::{Duration, Instant};

use super::Easing;

/// One in-flight timed interpolation from `from` to `to`.
///
/// The value is a pure function of the sampled instant: elapsed time is
/// measured from `started_at`, normalized by `duration`, shaped by `easing`.
/// Instants earlier than `started_at` count as zero elapsed time.
///
/// A run is never rewound or retargeted. Callers that need to change course
/// build a new run starting from [`value_at`](Self::value_at) of the old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Instant,
    easing: Easing,
}

impl AnimationRun {
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Instant, easing: Easing) -> Self {
        Self { from, to, duration, started_at, easing }
    }

    #[inline]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[inline]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Linear time fraction in `[0, 1]`. A zero-duration run is complete at once.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`. Exactly `to` once the run has finished.
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = self.easing.apply(self.fraction(now));
        self.from + (self.to - self.from) * t
    }

    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }
}
