// SPDX-License-Identifier: MPL-2.0
//! Smooth-scroll driver for the thumbnail strip.
//!
//! Moves the strip's horizontal offset toward a target distance in
//! fixed-size steps, one per tick of an `iced::time::every` subscription.
//! A new request supersedes any run still in flight (tracked with a
//! generation counter) so rapid navigation cannot stack offsets.

use std::time::Duration;

/// Interval between scroll steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(5);

/// Pixels travelled per tick. Direction comes from the sign handed to
/// [`Driver::start`].
pub const STEP_PX: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    remaining: f32,
    step: f32,
}

/// Stepwise scroll animator.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    generation: u64,
    run: Option<Run>,
}

impl Driver {
    /// Starts a run covering `distance` pixels, `step.abs()` pixels per
    /// tick in the direction of `step`'s sign. Replaces any active run.
    /// Zero or negative distances and a zero step are ignored.
    pub fn start(&mut self, distance: f32, step: f32) {
        if distance <= 0.0 || step == 0.0 {
            return;
        }
        self.generation += 1;
        self.run = Some(Run {
            remaining: distance,
            step,
        });
    }

    /// Drops the active run, leaving the strip wherever it is.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            self.generation += 1;
        }
    }

    /// Advances one tick and returns the signed offset delta to apply,
    /// or `None` when idle. The final step is shortened so the total
    /// travelled distance matches the request exactly.
    pub fn tick(&mut self) -> Option<f32> {
        let run = self.run.as_mut()?;
        let magnitude = run.step.abs().min(run.remaining);
        run.remaining -= magnitude;
        let delta = magnitude.copysign(run.step);
        if run.remaining <= 0.0 {
            self.run = None;
        }
        Some(delta)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Monotonic counter bumped whenever a run starts or is cancelled.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
