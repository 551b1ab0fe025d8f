//! Animation clock for the sweep circle and the fill wipe.
//!
//! Both quantities are sampled from elapsed time rather than accumulated per
//! tick, so a late or dropped frame never skews them. Time comes from
//! `tokio::time::Instant`, which follows the paused clock in tests.

use std::time::Duration;

use tokio::time::Instant;

/// Full turn of the sweep circle.
pub const FULL_SWEEP_DEGREES: f32 = 360.0;

/// Largest sweep value; keeps the angle strictly below a full turn.
const MAX_SWEEP_DEGREES: f32 = 359.999;

/// Animated values for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationTick {
    /// Sweep angle in `[0, 360)`.
    pub sweep_degrees: f32,
    /// Width of the loading fill in `[0, width]`.
    pub fill_offset: f32,
    /// Zero-based index of the current cycle.
    pub cycle: u64,
}

impl AnimationTick {
    /// Values while not animating.
    pub const IDLE: Self = Self {
        sweep_degrees: 0.0,
        fill_offset: 0.0,
        cycle: 0,
    };
}

/// Repeating, time-driven animation.
///
/// Each cycle sweeps the angle from 0 towards 360 and the fill from 0 to the
/// full width, then starts over.
#[derive(Clone, Debug)]
pub struct LoadingAnimation {
    cycle: Duration,
    started_at: Option<Instant>,
}

impl LoadingAnimation {
    /// Create a stopped animation with the given cycle length.
    #[must_use]
    pub const fn new(cycle: Duration) -> Self {
        Self {
            cycle,
            started_at: None,
        }
    }

    #[must_use]
    pub const fn cycle(&self) -> Duration {
        self.cycle
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start (or restart) at `now`.
    pub const fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop. Returns whether it was running.
    pub const fn stop(&mut self) -> bool {
        self.started_at.take().is_some()
    }

    /// Values at `now` for a control of the given width.
    #[must_use]
    pub fn sample(&self, now: Instant, width: f32) -> AnimationTick {
        let Some(started_at) = self.started_at else {
            return AnimationTick::IDLE;
        };

        let elapsed = now.saturating_duration_since(started_at).as_nanos();
        let cycle = self.cycle.as_nanos().max(1);
        let index = elapsed / cycle;
        let fraction = (elapsed % cycle) as f64 / cycle as f64;

        let width = width.max(0.0);
        AnimationTick {
            sweep_degrees: ((f64::from(FULL_SWEEP_DEGREES) * fraction) as f32)
                .clamp(0.0, MAX_SWEEP_DEGREES),
            fill_offset: ((f64::from(width) * fraction) as f32).clamp(0.0, width),
            cycle: u64::try_from(index).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLE: Duration = Duration::from_millis(3_000);

    #[test]
    fn test_stopped_animation_is_idle() {
        let animation = LoadingAnimation::new(CYCLE);
        assert!(!animation.is_running());
        assert_eq!(animation.sample(Instant::now(), 300.0), AnimationTick::IDLE);
    }

    #[test]
    fn test_starts_at_zero() {
        let now = Instant::now();
        let mut animation = LoadingAnimation::new(CYCLE);
        animation.start(now);
        let tick = animation.sample(now, 300.0);
        assert!(tick.sweep_degrees.abs() < f32::EPSILON);
        assert!(tick.fill_offset.abs() < f32::EPSILON);
        assert_eq!(tick.cycle, 0);
    }

    #[test]
    fn test_half_cycle() {
        let start = Instant::now();
        let mut animation = LoadingAnimation::new(CYCLE);
        animation.start(start);
        let tick = animation.sample(start + Duration::from_millis(1_500), 300.0);
        assert!((tick.sweep_degrees - 180.0).abs() < 0.01);
        assert!((tick.fill_offset - 150.0).abs() < 0.01);
    }

    #[test]
    fn test_fill_is_monotonic_within_cycle_and_wraps() {
        let start = Instant::now();
        let mut animation = LoadingAnimation::new(CYCLE);
        animation.start(start);

        let mut previous = AnimationTick::IDLE;
        for ms in (0..3_000).step_by(16) {
            let tick = animation.sample(start + Duration::from_millis(ms), 300.0);
            assert_eq!(tick.cycle, 0);
            assert!(tick.fill_offset >= previous.fill_offset);
            assert!(tick.fill_offset <= 300.0);
            assert!(tick.sweep_degrees < FULL_SWEEP_DEGREES);
            previous = tick;
        }

        let wrapped = animation.sample(start + CYCLE, 300.0);
        assert_eq!(wrapped.cycle, 1);
        assert!(wrapped.fill_offset.abs() < f32::EPSILON);
        assert!(wrapped.sweep_degrees.abs() < f32::EPSILON);
    }

    #[test]
    fn test_sweep_never_reaches_full_turn() {
        let start = Instant::now();
        let mut animation = LoadingAnimation::new(CYCLE);
        animation.start(start);
        let tick = animation.sample(start + CYCLE - Duration::from_nanos(1), 300.0);
        assert!(tick.sweep_degrees < FULL_SWEEP_DEGREES);
        assert!(tick.fill_offset <= 300.0);
    }

    #[test]
    fn test_stop_returns_previous_state() {
        let mut animation = LoadingAnimation::new(CYCLE);
        assert!(!animation.stop());
        animation.start(Instant::now());
        assert!(animation.stop());
        assert!(!animation.is_running());
    }
}
