//! Time-driven interpolation.
//!
//! Animations here are *pulled*: an [`AnimationRun`] stores when it started
//! and evaluates its value for any sampled `Instant`. Nothing advances behind
//! the caller's back, so querying the same instant twice always yields the
//! same value and there are no update callbacks to register.

mod easing;
mod run;

pub use easing::Easing;
pub use run::AnimationRun;
