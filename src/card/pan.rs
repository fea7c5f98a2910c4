//! Pan gestures and how they map onto the card's transition.
//!
//! A pan arrives as a sequence of [`PanSample`]s: one `Began`, any number of
//! `Changed`, then exactly one terminal `Ended` (or `Cancelled`). Samples can
//! come from any gesture source; [`PanRecognizer`] builds them from raw
//! pointer presses for hosts that only deliver mouse/touch events.

use std::time::Duration;

use super::state::CardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    /// The source gave up on the gesture (pointer left, focus lost).
    Cancelled,
}

/// One report from a pan gesture. Translation is cumulative since `Began`;
/// positive values point down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSample {
    pub phase: PanPhase,
    pub translation_y: f32,
    /// Units per second, positive downward
    pub velocity_y: f32,
}

impl PanSample {
    pub fn began() -> Self {
        Self {
            phase: PanPhase::Began,
            translation_y: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn changed(translation_y: f32) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation_y,
            velocity_y: 0.0,
        }
    }

    pub fn ended(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation_y,
            velocity_y,
        }
    }

    pub fn cancelled(translation_y: f32) -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation_y,
            velocity_y: 0.0,
        }
    }
}

/// Timeline delta produced by a vertical drag of `translation_y`.
///
/// Dragging up moves a closed card toward open. When the card is open the
/// sign flips, and it flips again if the animator is running reversed, so
/// the card always follows the finger.
pub fn drag_fraction(
    translation_y: f32,
    closed_offset: f32,
    state: CardState,
    reversed: bool,
) -> f32 {
    if closed_offset <= 0.0 || !translation_y.is_finite() {
        return 0.0;
    }
    let mut fraction = -translation_y / closed_offset;
    if state == CardState::Open {
        fraction = -fraction;
    }
    if reversed {
        fraction = -fraction;
    }
    fraction
}

/// Release decisions, keyed by (transition target, should close, reversed
/// before release). The value says whether to flip the reversed flag.
const RELEASE_FLIPS: [((CardState, bool, bool), bool); 8] = [
    ((CardState::Open, false, false), false),
    ((CardState::Open, false, true), true),
    ((CardState::Open, true, true), false),
    ((CardState::Open, true, false), true),
    ((CardState::Closed, true, false), false),
    ((CardState::Closed, true, true), true),
    ((CardState::Closed, false, true), false),
    ((CardState::Closed, false, false), true),
];

/// Whether the animator's reversed flag must flip so that releasing the
/// pan heads toward closed (`should_close`) or open.
pub fn release_flips_direction(target: CardState, should_close: bool, reversed: bool) -> bool {
    RELEASE_FLIPS
        .iter()
        .find(|(key, _)| *key == (target, should_close, reversed))
        .map(|(_, flip)| *flip)
        .unwrap_or(false)
}

/// Outcome of feeding a pointer event to a [`PanRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Nothing to report yet
    Pending,
    /// A pan sample is ready
    Pan(PanSample),
    /// Press released without moving past the pan threshold
    Tap { on_button: bool },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    start_y: f32,
    on_button: bool,
    panning: bool,
    last_y: f32,
    last_time: Duration,
    velocity_y: f32,
}

/// Turns pointer press/move/release sequences into pan samples.
///
/// Time comes from the caller (the card's frame clock), so velocity is
/// measured in the same time base the animations run on.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    threshold: f32,
    press: Option<Press>,
}

impl PanRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            press: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.press.is_some_and(|p| p.panning)
    }

    pub fn press(&mut self, y: f32, now: Duration, on_button: bool) {
        self.press = Some(Press {
            start_y: y,
            on_button,
            panning: false,
            last_y: y,
            last_time: now,
            velocity_y: 0.0,
        });
    }

    pub fn moved(&mut self, y: f32, now: Duration) -> PointerGesture {
        let threshold = self.threshold;
        let Some(press) = self.press.as_mut() else {
            return PointerGesture::Pending;
        };
        track(press, y, now);

        if !press.panning {
            if (y - press.start_y).abs() < threshold {
                return PointerGesture::Pending;
            }
            press.panning = true;
            // The pan starts where the threshold was crossed
            press.start_y = y;
            return PointerGesture::Pan(PanSample::began());
        }
        PointerGesture::Pan(PanSample::changed(y - press.start_y))
    }

    pub fn release(&mut self, y: f32, now: Duration) -> PointerGesture {
        let Some(mut press) = self.press.take() else {
            return PointerGesture::Pending;
        };
        if !press.panning {
            return PointerGesture::Tap {
                on_button: press.on_button,
            };
        }
        track(&mut press, y, now);
        PointerGesture::Pan(PanSample::ended(y - press.start_y, press.velocity_y))
    }

    /// Abandon the current press. A pan in progress is reported cancelled.
    pub fn cancel(&mut self) -> PointerGesture {
        match self.press.take() {
            Some(press) if press.panning => {
                PointerGesture::Pan(PanSample::cancelled(press.last_y - press.start_y))
            }
            _ => PointerGesture::Pending,
        }
    }
}

fn track(press: &mut Press, y: f32, now: Duration) {
    let dt = now.saturating_sub(press.last_time).as_secs_f32();
    if dt > 0.0 {
        press.velocity_y = (y - press.last_y) / dt;
        press.last_time = now;
    }
    press.last_y = y;
}
