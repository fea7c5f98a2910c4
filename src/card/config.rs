//! Construction-time configuration for a [`ScrollableCard`](super::ScrollableCard).
//!
//! Everything here is validated once by [`CardConfig::build`]; the resulting
//! [`CardGeometry`] is immutable for the card's lifetime.

use std::time::Duration;

use thiserror::Error;

use super::content::CardContent;
use super::state::{CardAppearance, CardState};
use crate::animation::TimingFunction;
use crate::layout::Constraints;

/// Height of the header (title, toggle button, divider) above the content.
pub const DEFAULT_CHROME_HEIGHT: f32 = 61.0;
/// A closed card showing less than this much is treated as off-screen.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 20.0;
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.7;
/// Pointer travel before a press turns into a pan.
pub const DEFAULT_PAN_THRESHOLD: f32 = 4.0;
pub const TOGGLE_DURATION: Duration = Duration::from_millis(500);
pub const PRESENT_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("card height must be positive and finite, got {0}")]
    InvalidHeight(f32),
    #[error("reveal offset must be non-negative and finite, got {0}")]
    InvalidRevealOffset(f32),
    #[error("reveal offset {reveal} exceeds card height {height}")]
    RevealExceedsHeight { reveal: f32, height: f32 },
    #[error("overlay opacity must be within [0, 1], got {0}")]
    InvalidOverlayOpacity(f32),
    #[error("corner radius must be non-negative, got {0}")]
    InvalidCornerRadius(f32),
}

/// How the card's total height is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardSizing {
    /// Exactly this tall, chrome included.
    Fixed(f32),
    /// Content area this tall, plus the chrome.
    Container(f32),
    /// The content's natural height (measured once, unconstrained), plus
    /// the chrome. Meant for list-like content that knows its full extent.
    Scrollable,
}

#[derive(Debug, Clone)]
pub struct CardConfig {
    pub sizing: CardSizing,
    /// How much of the card stays visible above the bottom edge when closed
    pub reveal_offset: f32,
    pub corner_radius: f32,
    pub overlay_opacity: f32,
    pub chrome_height: f32,
    pub dismiss_threshold: f32,
    pub pan_threshold: f32,
    /// Duration of toggle taps and gesture-driven transitions
    pub toggle_duration: Duration,
    /// Duration of the automatic open on first appearance
    pub present_duration: Duration,
    pub timing: TimingFunction,
    /// Map drags straight onto the card's offset instead of through `timing`
    pub scrubs_linearly: bool,
    pub can_drag: bool,
    pub title: String,
}

impl CardConfig {
    pub fn new(sizing: CardSizing, reveal_offset: f32) -> Self {
        Self {
            sizing,
            reveal_offset,
            corner_radius: DEFAULT_CORNER_RADIUS,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            chrome_height: DEFAULT_CHROME_HEIGHT,
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            pan_threshold: DEFAULT_PAN_THRESHOLD,
            toggle_duration: TOGGLE_DURATION,
            present_duration: PRESENT_DURATION,
            timing: TimingFunction::default(),
            scrubs_linearly: true,
            can_drag: false,
            title: String::new(),
        }
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    pub fn chrome_height(mut self, height: f32) -> Self {
        self.chrome_height = height;
        self
    }

    pub fn dismiss_threshold(mut self, threshold: f32) -> Self {
        self.dismiss_threshold = threshold;
        self
    }

    pub fn pan_threshold(mut self, threshold: f32) -> Self {
        self.pan_threshold = threshold;
        self
    }

    pub fn toggle_duration(mut self, duration: Duration) -> Self {
        self.toggle_duration = duration;
        self
    }

    pub fn present_duration(mut self, duration: Duration) -> Self {
        self.present_duration = duration;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn scrubs_linearly(mut self, linear: bool) -> Self {
        self.scrubs_linearly = linear;
        self
    }

    pub fn can_drag(mut self, can_drag: bool) -> Self {
        self.can_drag = can_drag;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Resolve the sizing strategy and validate every geometric input.
    ///
    /// `content` is only consulted for [`CardSizing::Scrollable`].
    pub fn build(&self, content: &mut dyn CardContent) -> Result<CardGeometry, ConfigError> {
        let card_height = match self.sizing {
            CardSizing::Fixed(height) => height,
            CardSizing::Container(height) => height + self.chrome_height,
            CardSizing::Scrollable => {
                content.layout(Constraints::unbounded()).height + self.chrome_height
            }
        };
        if !card_height.is_finite() || card_height <= 0.0 {
            return Err(ConfigError::InvalidHeight(card_height));
        }
        if !self.reveal_offset.is_finite() || self.reveal_offset < 0.0 {
            return Err(ConfigError::InvalidRevealOffset(self.reveal_offset));
        }
        if self.reveal_offset > card_height {
            return Err(ConfigError::RevealExceedsHeight {
                reveal: self.reveal_offset,
                height: card_height,
            });
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(ConfigError::InvalidOverlayOpacity(self.overlay_opacity));
        }
        if self.corner_radius.is_nan() || self.corner_radius < 0.0 {
            return Err(ConfigError::InvalidCornerRadius(self.corner_radius));
        }

        Ok(CardGeometry {
            card_height,
            closed_offset: card_height - self.reveal_offset,
            corner_radius: self.corner_radius,
            overlay_opacity: self.overlay_opacity,
        })
    }
}

/// Resolved, immutable card dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub card_height: f32,
    /// Bottom offset while closed: `card_height - reveal_offset`, never negative
    pub closed_offset: f32,
    /// Corner radius while open
    pub corner_radius: f32,
    /// Overlay opacity while open
    pub overlay_opacity: f32,
}

impl CardGeometry {
    pub fn offset_for(&self, state: CardState) -> f32 {
        match state {
            CardState::Open => 0.0,
            CardState::Closed => self.closed_offset,
        }
    }

    /// Resting appearance for `state`; the endpoints every transition
    /// interpolates between.
    pub fn appearance_for(&self, state: CardState) -> CardAppearance {
        match state {
            CardState::Open => CardAppearance {
                bottom_offset: 0.0,
                corner_radius: self.corner_radius,
                overlay_opacity: self.overlay_opacity,
            },
            CardState::Closed => CardAppearance {
                bottom_offset: self.closed_offset,
                corner_radius: 0.0,
                overlay_opacity: 0.0,
            },
        }
    }

    pub fn reveal_offset(&self) -> f32 {
        self.card_height - self.closed_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::content::EmptyContent;
    use crate::layout::Size;

    struct TallList {
        rows: usize,
    }

    impl CardContent for TallList {
        fn layout(&mut self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(320.0, self.rows as f32 * 44.0))
        }

        fn set_origin(&mut self, _x: f32, _y: f32) {}
    }

    #[test]
    fn test_fixed_sizing() {
        let geometry = CardConfig::new(CardSizing::Fixed(600.0), 0.0)
            .build(&mut EmptyContent)
            .unwrap();
        assert_eq!(geometry.card_height, 600.0);
        assert_eq!(geometry.closed_offset, 600.0);
        assert_eq!(geometry.reveal_offset(), 0.0);
    }

    #[test]
    fn test_container_sizing_adds_chrome() {
        let geometry = CardConfig::new(CardSizing::Container(400.0), 100.0)
            .build(&mut EmptyContent)
            .unwrap();
        assert_eq!(geometry.card_height, 461.0);
        assert_eq!(geometry.closed_offset, 361.0);
    }

    #[test]
    fn test_scrollable_sizing_measures_content() {
        let geometry = CardConfig::new(CardSizing::Scrollable, 61.0)
            .build(&mut TallList { rows: 10 })
            .unwrap();
        assert_eq!(geometry.card_height, 501.0);
        assert_eq!(geometry.closed_offset, 440.0);
    }

    #[test]
    fn test_closed_offset_never_negative() {
        for height in [1.0f32, 61.0, 600.0, 1234.5] {
            for share in [0.0f32, 0.25, 0.5, 1.0] {
                let reveal = height * share;
                let geometry = CardConfig::new(CardSizing::Fixed(height), reveal)
                    .build(&mut EmptyContent)
                    .unwrap();
                assert!(geometry.closed_offset >= 0.0);
                assert_eq!(geometry.closed_offset, height - reveal);
            }
        }
    }

    #[test]
    fn test_reveal_larger_than_card_is_rejected() {
        let err = CardConfig::new(CardSizing::Fixed(300.0), 301.0)
            .build(&mut EmptyContent)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RevealExceedsHeight {
                reveal: 301.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let cases = [
            CardConfig::new(CardSizing::Fixed(0.0), 0.0),
            CardConfig::new(CardSizing::Fixed(f32::NAN), 0.0),
            CardConfig::new(CardSizing::Fixed(200.0), -1.0),
            CardConfig::new(CardSizing::Fixed(200.0), 0.0).overlay_opacity(1.5),
            CardConfig::new(CardSizing::Fixed(200.0), 0.0).corner_radius(-2.0),
        ];
        for config in cases {
            assert!(config.build(&mut EmptyContent).is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_appearance_endpoints() {
        let geometry = CardConfig::new(CardSizing::Fixed(600.0), 100.0)
            .build(&mut EmptyContent)
            .unwrap();
        let open = geometry.appearance_for(CardState::Open);
        assert_eq!(open.bottom_offset, 0.0);
        assert_eq!(open.corner_radius, 10.0);
        assert_eq!(open.overlay_opacity, 0.7);

        let closed = geometry.appearance_for(CardState::Closed);
        assert_eq!(closed.bottom_offset, 500.0);
        assert_eq!(closed.corner_radius, 0.0);
        assert_eq!(closed.overlay_opacity, 0.0);
        assert_eq!(geometry.offset_for(CardState::Closed), 500.0);
    }
}
