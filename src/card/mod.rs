//! The draggable bottom card.
//!
//! [`ScrollableCard`] hosts arbitrary content beneath a fixed header and
//! moves between two resting states, [`CardState::Open`] and
//! [`CardState::Closed`], through a single interruptible
//! [`PropertyAnimator`]. Taps on the toggle button, the automatic open on
//! first appearance, and pan gestures all go through the same transition
//! request.
//!
//! # State Machine
//!
//! - A transition request builds a new animator toward the requested state
//!   unless the current one is running, in which case the request is
//!   dropped. Paused or finished animators are replaced.
//! - A pan `Began` requests the opposite state and immediately pauses, so
//!   `Changed` samples scrub the prebuilt transition. `Ended` picks a
//!   direction from the release velocity and lets the animator finish.
//! - The resting state changes only when an animator finishes: at its end
//!   the card rests in the target state, back at its start it rests in the
//!   opposite one, and a mid-flight stop leaves the state untouched.
//!
//! # Invariants
//!
//! 1. At most one animator is running.
//! 2. After every completion the bottom offset is exactly 0 (open) or
//!    exactly the closed offset (closed).
//! 3. Scrubbed fractions are clamped to [0, 1].
//! 4. A card that would close entirely below the viewport (less than the
//!    dismiss threshold visible) tears itself down instead.
//!
//! All input is expected on one thread, in order: the host forwards events
//! and frame ticks sequentially.

mod config;
mod content;
mod pan;
mod state;
mod transition;

pub use config::{CardConfig, CardGeometry, CardSizing, ConfigError};
pub use content::{CardContent, EmptyContent};
pub use pan::{
    drag_fraction, release_flips_direction, PanPhase, PanRecognizer, PanSample, PointerGesture,
};
pub use state::{CardAppearance, CardState};
pub use transition::TransitionHandle;

use std::time::Duration;

use log::{debug, info, trace};

use crate::animation::{
    AnimatingPosition, AnimatorState, PropertyAnimator, TimingFunction, Transition,
};
use crate::event::{Event, EventResponse, MouseButton};
use crate::invalidation::ChangeFlags;
use crate::layout::{Constraints, Rect};

const TOGGLE_BUTTON_SIZE: f32 = 24.0;
const TOGGLE_BUTTON_TOP: f32 = 16.0;
const TOGGLE_BUTTON_TRAILING: f32 = 18.0;

pub struct ScrollableCard {
    geometry: CardGeometry,
    chrome_height: f32,
    dismiss_threshold: f32,
    toggle_duration: Duration,
    present_duration: Duration,
    timing: TimingFunction,
    scrubs_linearly: bool,
    can_drag: bool,
    title: String,

    state: CardState,
    /// Presented values; `appearance.bottom_offset` is what the view layer
    /// positions the card with.
    appearance: CardAppearance,
    transition: Option<TransitionHandle>,
    /// Fraction the animator sat at when the current pan began
    progress_at_pause: f32,
    transitions_started: u64,
    appeared: bool,
    dismissed: bool,

    viewport: Option<Rect>,
    content: Box<dyn CardContent>,
    recognizer: PanRecognizer,
    /// Sum of every `advance` step; the time base for pointer velocity
    clock: Duration,
    change_flags: ChangeFlags,
    on_state_change: Option<Box<dyn FnMut(CardState)>>,
    on_dismiss: Option<Box<dyn FnOnce()>>,
}

impl ScrollableCard {
    /// Build a closed card around `content`.
    ///
    /// Fails when the configuration can't produce a valid geometry, e.g. a
    /// reveal offset larger than the card.
    pub fn new(
        config: CardConfig,
        content: impl CardContent + 'static,
    ) -> Result<Self, ConfigError> {
        let mut content: Box<dyn CardContent> = Box::new(content);
        let geometry = config.build(content.as_mut())?;
        info!(
            "Creating card: height {}, closed offset {}",
            geometry.card_height, geometry.closed_offset
        );

        let state = CardState::default();
        Ok(Self {
            geometry,
            chrome_height: config.chrome_height,
            dismiss_threshold: config.dismiss_threshold,
            toggle_duration: config.toggle_duration,
            present_duration: config.present_duration,
            timing: config.timing,
            scrubs_linearly: config.scrubs_linearly,
            can_drag: config.can_drag,
            title: config.title,
            state,
            appearance: geometry.appearance_for(state),
            transition: None,
            progress_at_pause: 0.0,
            transitions_started: 0,
            appeared: false,
            dismissed: false,
            viewport: None,
            content,
            recognizer: PanRecognizer::new(config.pan_threshold),
            clock: Duration::ZERO,
            change_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            on_state_change: None,
            on_dismiss: None,
        })
    }

    /// Called after a transition settles the card into a different state.
    pub fn on_state_change<F: FnMut(CardState) + 'static>(mut self, callback: F) -> Self {
        self.on_state_change = Some(Box::new(callback));
        self
    }

    /// Called once when the card tears down, whether asked to or on its own.
    pub fn on_dismiss<F: FnOnce() + 'static>(mut self, callback: F) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// The card became visible. The first call animates it open.
    pub fn did_appear(&mut self) {
        if self.appeared || self.dismissed {
            return;
        }
        self.appeared = true;
        self.request_transition(CardState::Open, self.present_duration);
    }

    /// Start animating toward `to`.
    ///
    /// Returns `false` without touching anything when a transition is
    /// already running or the card is gone.
    pub fn request_transition(&mut self, to: CardState, duration: Duration) -> bool {
        if self.dismissed {
            return false;
        }
        if self
            .transition
            .as_ref()
            .is_some_and(TransitionHandle::is_running)
        {
            debug!("Ignoring transition to {:?}: one is already running", to);
            return false;
        }

        let mut animator = PropertyAnimator::new(
            self.appearance,
            self.geometry.appearance_for(to),
            Transition::new(duration, self.timing.clone()),
        );
        animator.set_scrubs_linearly(self.scrubs_linearly);
        animator.start();
        debug!("Transition to {:?} over {:?}", to, duration);

        self.transition = Some(TransitionHandle {
            target: to,
            animator,
        });
        self.transitions_started += 1;
        true
    }

    /// Toggle-button action: head for the opposite state.
    pub fn toggle(&mut self) -> bool {
        self.request_transition(self.state.opposite(), self.toggle_duration)
    }

    /// Move running animations forward by `dt`. Returns whether anything is
    /// still animating, i.e. whether the host should schedule another frame.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.clock += dt;
        let completion = match self.transition.as_mut() {
            Some(handle) if !self.dismissed => handle.animator.advance(dt),
            _ => return false,
        };
        self.sync_appearance();
        if let Some(position) = completion {
            self.complete_transition(position);
        }
        self.is_animating()
    }

    /// Feed one pan sample. Ignored unless dragging is enabled.
    pub fn handle_pan(&mut self, sample: PanSample) -> EventResponse {
        if self.dismissed || !self.can_drag {
            return EventResponse::Ignored;
        }
        match sample.phase {
            PanPhase::Began => self.begin_pan(),
            PanPhase::Changed => self.scrub(sample.translation_y),
            PanPhase::Ended => self.release(sample.velocity_y),
            PanPhase::Cancelled => {
                trace!("Pan cancelled, holding fraction");
                return EventResponse::Ignored;
            }
        }
        EventResponse::Handled
    }

    /// Route a pointer event: presses on the card become pans or, on the
    /// toggle button, taps.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        if self.dismissed {
            return EventResponse::Ignored;
        }
        let now = self.clock;
        match event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if !self.frame().contains(*x, *y) {
                    return EventResponse::Ignored;
                }
                let on_button = self.toggle_button_rect().contains(*x, *y);
                self.recognizer.press(*y, now, on_button);
                EventResponse::Handled
            }
            Event::MouseMove { y, .. } if self.recognizer.is_tracking() => {
                let gesture = self.recognizer.moved(*y, now);
                self.pointer_gesture(gesture)
            }
            Event::MouseUp {
                y,
                button: MouseButton::Left,
                ..
            } if self.recognizer.is_tracking() => {
                let gesture = self.recognizer.release(*y, now);
                self.pointer_gesture(gesture)
            }
            Event::MouseLeave => {
                let gesture = self.recognizer.cancel();
                self.pointer_gesture(gesture);
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }

    /// Position the card inside `viewport` and fit the content to the region
    /// under the header.
    pub fn layout(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
        let region = self.content_region();
        self.content.layout(Constraints::tight(region.size()));
        self.content.set_origin(region.x, region.y);
        trace!("Card laid out at {:?}, content {:?}", self.frame(), region);
    }

    /// Tear the card down without animating. Safe to call more than once.
    pub fn dismiss(&mut self) {
        if self.dismissed {
            return;
        }
        self.dismissed = true;
        info!("Dismissing card");
        self.recognizer.cancel();
        if let Some(position) = self.transition.as_mut().and_then(|h| h.animator.stop()) {
            self.complete_transition(position);
        }
        self.content.detach();
        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
    }

    fn begin_pan(&mut self) {
        self.request_transition(self.state.opposite(), self.toggle_duration);
        if let Some(handle) = self.transition.as_mut() {
            handle.animator.pause();
            self.progress_at_pause = handle.animator.fraction_complete();
            trace!("Pan began at fraction {}", self.progress_at_pause);
        }
    }

    fn scrub(&mut self, translation_y: f32) {
        let state = self.state;
        let closed_offset = self.geometry.closed_offset;
        let base = self.progress_at_pause;
        let Some(handle) = self.transition.as_mut() else {
            return;
        };
        let delta = drag_fraction(
            translation_y,
            closed_offset,
            state,
            handle.animator.is_reversed(),
        );
        handle
            .animator
            .set_fraction_complete((delta + base).clamp(0.0, 1.0));
        self.sync_appearance();
    }

    fn release(&mut self, velocity_y: f32) {
        let velocity_y = if velocity_y.is_finite() { velocity_y } else { 0.0 };
        let Some(handle) = self.transition.as_mut() else {
            return;
        };

        if velocity_y == 0.0 {
            // No flick: finish along the current heading. Sitting on either
            // end already counts as finished there.
            let fraction = handle.animator.timeline_position();
            let completion = if fraction <= 0.0 {
                handle.animator.finish_at(AnimatingPosition::Start)
            } else if fraction >= 1.0 {
                handle.animator.finish_at(AnimatingPosition::End)
            } else {
                handle.animator.continue_animation(0.0);
                None
            };
            debug!("Pan released without velocity at position {}", fraction);
            if let Some(position) = completion {
                self.complete_transition(position);
            }
            return;
        }

        let should_close = velocity_y > 0.0;
        let reversed = handle.animator.is_reversed();
        if release_flips_direction(handle.target, should_close, reversed) {
            handle.animator.set_reversed(!reversed);
        }
        debug!(
            "Pan released at {} units/s, heading {}",
            velocity_y,
            if should_close { "closed" } else { "open" }
        );
        handle.animator.continue_animation(0.0);
    }

    fn pointer_gesture(&mut self, gesture: PointerGesture) -> EventResponse {
        match gesture {
            PointerGesture::Pending => EventResponse::Handled,
            PointerGesture::Pan(sample) => {
                self.handle_pan(sample);
                EventResponse::Handled
            }
            PointerGesture::Tap { on_button: true } => {
                self.toggle();
                EventResponse::Handled
            }
            PointerGesture::Tap { on_button: false } => EventResponse::Ignored,
        }
    }

    fn complete_transition(&mut self, position: AnimatingPosition) {
        let Some(resolved) = self.transition.as_ref().map(|h| h.resolve(position)) else {
            return;
        };
        let previous = self.state;
        match resolved {
            Some(state) => {
                self.state = state;
                self.set_appearance(self.geometry.appearance_for(state));
            }
            None => {
                let snapped = CardAppearance {
                    bottom_offset: self.geometry.offset_for(self.state),
                    ..self.appearance
                };
                self.set_appearance(snapped);
            }
        }
        info!(
            "Transition finished at {:?}, card is {:?}",
            position, self.state
        );

        if resolved.is_some_and(|state| state != previous) {
            if let Some(callback) = self.on_state_change.as_mut() {
                callback(self.state);
            }
        }
        if self.state == CardState::Closed && !self.dismissed && self.closed_card_hidden() {
            info!("Closed card is off screen, dismissing");
            self.dismiss();
        }
    }

    /// Whether the card, resting closed, shows less than the dismiss
    /// threshold above the viewport's bottom edge.
    fn closed_card_hidden(&self) -> bool {
        let Some(viewport) = self.viewport else {
            debug!("No viewport yet, skipping visibility check");
            return false;
        };
        self.frame().min_y() > viewport.max_y() - self.dismiss_threshold
    }

    /// Copy the animator's current value into the presented appearance.
    /// A finished animator no longer drives anything; completion has
    /// already snapped the appearance to the resting values.
    fn sync_appearance(&mut self) {
        let value = match self.transition.as_ref() {
            Some(handle) if handle.animator.state() != AnimatorState::Stopped => {
                handle.animator.value()
            }
            _ => return,
        };
        self.set_appearance(value);
    }

    fn set_appearance(&mut self, appearance: CardAppearance) {
        if appearance.bottom_offset != self.appearance.bottom_offset {
            self.change_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
        if appearance.corner_radius != self.appearance.corner_radius
            || appearance.overlay_opacity != self.appearance.overlay_opacity
        {
            self.change_flags |= ChangeFlags::NEEDS_PAINT;
        }
        self.appearance = appearance;
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    pub fn appearance(&self) -> CardAppearance {
        self.appearance
    }

    /// Live distance from the container's bottom edge to the card's.
    pub fn bottom_offset(&self) -> f32 {
        self.appearance.bottom_offset
    }

    pub fn transition(&self) -> Option<&TransitionHandle> {
        self.transition.as_ref()
    }

    /// How many animators this card has built; requests that were dropped
    /// don't count.
    pub fn transitions_started(&self) -> u64 {
        self.transitions_started
    }

    pub fn progress_at_pause(&self) -> f32 {
        self.progress_at_pause
    }

    pub fn is_animating(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(TransitionHandle::is_running)
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.change_flags |= ChangeFlags::NEEDS_PAINT;
    }

    pub fn can_drag(&self) -> bool {
        self.can_drag
    }

    /// Enable or disable pan handling. Turning it off mid-pan cancels the
    /// pointer gesture; the animator keeps whatever fraction it had.
    pub fn set_can_drag(&mut self, can_drag: bool) {
        if !can_drag && self.recognizer.is_panning() {
            self.recognizer.cancel();
        }
        self.can_drag = can_drag;
    }

    /// Take and clear what changed since the last call.
    pub fn take_change_flags(&mut self) -> ChangeFlags {
        std::mem::replace(&mut self.change_flags, ChangeFlags::empty())
    }

    /// The card's rectangle at the current bottom offset, in viewport
    /// coordinates. Empty width until the first layout.
    pub fn frame(&self) -> Rect {
        let viewport = self.viewport.unwrap_or_default();
        Rect::new(
            viewport.x,
            viewport.max_y() - self.geometry.card_height + self.appearance.bottom_offset,
            viewport.width,
            self.geometry.card_height,
        )
    }

    /// Header strip holding the title and toggle button.
    pub fn header_rect(&self) -> Rect {
        self.frame().split_top(self.chrome_height).0
    }

    pub fn content_region(&self) -> Rect {
        self.frame().split_top(self.chrome_height).1
    }

    pub fn toggle_button_rect(&self) -> Rect {
        let frame = self.frame();
        Rect::new(
            frame.max_x() - TOGGLE_BUTTON_TRAILING - TOGGLE_BUTTON_SIZE,
            frame.y + TOGGLE_BUTTON_TOP,
            TOGGLE_BUTTON_SIZE,
            TOGGLE_BUTTON_SIZE,
        )
    }
}

impl std::fmt::Debug for ScrollableCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollableCard")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("appearance", &self.appearance)
            .field("transition", &self.transition)
            .field("dismissed", &self.dismissed)
            .finish_non_exhaustive()
    }
}
