//! A draggable bottom card: a container that slides up from the bottom edge,
//! hosts arbitrary content, and moves between open and closed positions
//! through interruptible, reversible, velocity-aware transitions that follow
//! pan gestures.
//!
//! The crate is headless. The host forwards pointer events or pan samples,
//! ticks animations from its frame loop, and reads back the card's frame and
//! appearance to draw it.
//!
//! ```no_run
//! use std::time::Duration;
//! use scroll_card::prelude::*;
//!
//! let mut card = ScrollableCard::new(
//!     CardConfig::new(CardSizing::Fixed(600.0), 80.0)
//!         .title("Details")
//!         .can_drag(true),
//!     EmptyContent,
//! )?;
//! card.layout(Rect::new(0.0, 0.0, 375.0, 812.0));
//! card.did_appear();
//! while card.advance(Duration::from_millis(16)) {
//!     let frame = card.frame();
//!     // draw the card at `frame` ...
//! }
//! # Ok::<(), scroll_card::card::ConfigError>(())
//! ```

pub mod animation;
pub mod card;
pub mod event;
pub mod invalidation;
pub mod layout;

pub mod prelude {
    pub use crate::animation::{
        AnimatingPosition, Animatable, PropertyAnimator, SpringConfig, TimingFunction,
        Transition,
    };
    pub use crate::card::{
        CardAppearance, CardConfig, CardContent, CardGeometry, CardSizing, CardState,
        ConfigError, EmptyContent, PanPhase, PanSample, ScrollableCard,
    };
    pub use crate::event::{Event, EventResponse, MouseButton};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{Constraints, Rect, Size};
}

pub use card::ScrollableCard;
