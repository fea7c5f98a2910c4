//! Interruptible, scrubbable, reversible transitions.
//!
//! A [`PropertyAnimator`] owns a timeline running from the `from` value to
//! the `to` value. While running it moves along that timeline as the host
//! calls [`PropertyAnimator::advance`]; while paused the fraction can be set
//! directly, which is how a live gesture scrubs a prebuilt transition.
//!
//! # Invariants
//!
//! 1. `fraction_complete()` is always within [0.0, 1.0] and measures
//!    progress in the direction the animator is heading: toward `to`
//!    normally, toward `from` when reversed.
//! 2. A reversed animator completes at [`AnimatingPosition::Start`];
//!    otherwise it completes at [`AnimatingPosition::End`].
//! 3. Completion is reported exactly once, by the call that stops the
//!    animator. A stopped animator never reports again.
//! 4. Pausing, scrubbing and resuming never make the value jump: a paused
//!    animator that scrubs linearly is re-based onto its eased progress when
//!    it pauses, and resuming eases from wherever it was left.

use std::time::Duration;

use super::{Animatable, Transition};

/// Where on its timeline an animator finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatingPosition {
    /// The value the transition started from.
    Start,
    /// The transition's target value.
    End,
    /// Somewhere in between; the animator was stopped mid-flight.
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// Built but never started.
    Inactive,
    /// Moving along the timeline on every `advance`.
    Running,
    /// Frozen at its current fraction.
    Paused,
    /// Finished; completion has been reported.
    Stopped,
}

/// Eased segment started by a resume: progress `start` at timeline
/// position `origin`, heading to whichever end the animator is running to.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: f32,
    origin: f32,
}

pub struct PropertyAnimator<T: Animatable> {
    from: T,
    to: T,
    transition: Transition,
    /// Timeline position: 0.0 at `from`, 1.0 at `to`, regardless of direction.
    position: f32,
    reversed: bool,
    state: AnimatorState,
    /// Timeline fraction covered per second while running.
    rate: f32,
    scrubs_linearly: bool,
    segment: Option<Segment>,
}

impl<T: Animatable> PropertyAnimator<T> {
    pub fn new(from: T, to: T, transition: Transition) -> Self {
        let rate = natural_rate(transition.duration);
        Self {
            from,
            to,
            transition,
            position: 0.0,
            reversed: false,
            state: AnimatorState::Inactive,
            rate,
            scrubs_linearly: true,
            segment: None,
        }
    }

    /// Whether a paused animator maps its fraction straight onto the value
    /// (the default) or through the timing curve.
    pub fn set_scrubs_linearly(&mut self, linear: bool) {
        self.scrubs_linearly = linear;
    }

    pub fn scrubs_linearly(&self) -> bool {
        self.scrubs_linearly
    }

    /// Begin moving forward from the current fraction.
    pub fn start(&mut self) {
        if self.state == AnimatorState::Inactive {
            self.state = AnimatorState::Running;
        }
    }

    /// Freeze at the current fraction. Has no effect once stopped.
    pub fn pause(&mut self) {
        match self.state {
            AnimatorState::Running => {
                if self.scrubs_linearly {
                    self.position = self.progress().clamp(0.0, 1.0);
                    self.segment = None;
                }
                self.state = AnimatorState::Paused;
            }
            AnimatorState::Inactive => self.state = AnimatorState::Paused,
            AnimatorState::Paused | AnimatorState::Stopped => {}
        }
    }

    /// Resume after a pause (or start an inactive animator), in whichever
    /// direction `is_reversed` currently says.
    ///
    /// `duration_factor` scales the full duration to get the time left to
    /// finish. A factor of 0.0 keeps the natural pace, so the remaining
    /// fraction takes the same share of the duration it originally would.
    pub fn continue_animation(&mut self, duration_factor: f32) {
        if self.state == AnimatorState::Stopped {
            return;
        }
        let remaining = self.remaining_fraction();
        self.rate = if duration_factor > 0.0 && duration_factor.is_finite() {
            let secs = self.transition.duration.as_secs_f32() * duration_factor;
            if secs > 0.0 { remaining / secs } else { f32::INFINITY }
        } else {
            natural_rate(self.transition.duration)
        };
        self.rebase();
        self.state = AnimatorState::Running;
    }

    /// Move the timeline forward by `dt`.
    ///
    /// Returns the completion position when this call finishes the
    /// animation, `None` otherwise.
    pub fn advance(&mut self, dt: Duration) -> Option<AnimatingPosition> {
        if self.state != AnimatorState::Running {
            return None;
        }
        let step = self.rate * dt.as_secs_f32();
        if self.reversed {
            self.position = (self.position - step).max(0.0);
            if self.position <= 0.0 {
                return self.finish_at(AnimatingPosition::Start);
            }
        } else {
            self.position = (self.position + step).min(1.0);
            if self.position >= 1.0 {
                return self.finish_at(AnimatingPosition::End);
            }
        }
        None
    }

    /// Stop immediately at `position`, jumping the timeline there.
    /// Returns `None` if the animator had already stopped.
    pub fn finish_at(&mut self, position: AnimatingPosition) -> Option<AnimatingPosition> {
        if self.state == AnimatorState::Stopped {
            return None;
        }
        match position {
            AnimatingPosition::Start => {
                self.position = 0.0;
                self.segment = None;
            }
            AnimatingPosition::End => {
                self.position = 1.0;
                self.segment = None;
            }
            AnimatingPosition::Current => {}
        }
        self.state = AnimatorState::Stopped;
        Some(position)
    }

    /// Stop where it is. Reports [`AnimatingPosition::Current`] unless the
    /// timeline happens to sit on one of its ends.
    pub fn stop(&mut self) -> Option<AnimatingPosition> {
        let position = if self.position <= 0.0 {
            AnimatingPosition::Start
        } else if self.position >= 1.0 {
            AnimatingPosition::End
        } else {
            AnimatingPosition::Current
        };
        self.finish_at(position)
    }

    /// Progress toward the end the animator is heading to.
    pub fn fraction_complete(&self) -> f32 {
        if self.reversed {
            1.0 - self.position
        } else {
            self.position
        }
    }

    /// Scrub the timeline, measured like [`fraction_complete`](Self::fraction_complete).
    /// Values are clamped to [0, 1]; non-finite input is ignored.
    pub fn set_fraction_complete(&mut self, fraction: f32) {
        if self.state == AnimatorState::Stopped || !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.position = if self.reversed { 1.0 - fraction } else { fraction };
    }

    /// Position on the fixed timeline: 0.0 at the start value, 1.0 at the
    /// target, whichever way the animator runs.
    pub fn timeline_position(&self) -> f32 {
        self.position
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        if reversed == self.reversed {
            return;
        }
        if self.state == AnimatorState::Running {
            // Ease toward the new end from the current value
            self.rebase();
        }
        self.reversed = reversed;
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.transition.duration
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    /// The value at the current point of the timeline.
    pub fn value(&self) -> T {
        T::lerp(&self.from, &self.to, self.progress())
    }

    /// Interpolation factor between `from` and `to` for the current
    /// position, shaped by the timing function unless scrubbing linearly.
    fn progress(&self) -> f32 {
        if self.state == AnimatorState::Paused && self.scrubs_linearly {
            return self.position;
        }
        let timing = &self.transition.timing;
        let Some(segment) = self.segment else {
            return timing.evaluate(self.position);
        };
        let (end, t) = if self.reversed {
            let t = if segment.origin > 0.0 {
                (segment.origin - self.position) / segment.origin
            } else {
                1.0
            };
            (0.0, t)
        } else {
            let t = if segment.origin < 1.0 {
                (self.position - segment.origin) / (1.0 - segment.origin)
            } else {
                1.0
            };
            (1.0, t)
        };
        <f32 as Animatable>::lerp(&segment.start, &end, timing.evaluate(t))
    }

    fn rebase(&mut self) {
        let start = self.progress();
        self.segment = Some(Segment {
            start,
            origin: self.position,
        });
    }

    fn remaining_fraction(&self) -> f32 {
        1.0 - self.fraction_complete()
    }
}

fn natural_rate(duration: Duration) -> f32 {
    let secs = duration.as_secs_f32();
    if secs > 0.0 { 1.0 / secs } else { f32::INFINITY }
}

impl<T: Animatable + std::fmt::Debug> std::fmt::Debug for PropertyAnimator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyAnimator")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.transition.duration)
            .field("position", &self.position)
            .field("reversed", &self.reversed)
            .field("state", &self.state)
            .finish()
    }
}
