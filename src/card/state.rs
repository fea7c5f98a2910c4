use crate::animation::Animatable;

/// Resting position of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    /// Fully raised; bottom offset 0.
    Open,
    /// Lowered so only the reveal offset shows above the bottom edge.
    #[default]
    Closed,
}

impl CardState {
    pub const fn opposite(self) -> Self {
        match self {
            CardState::Open => CardState::Closed,
            CardState::Closed => CardState::Open,
        }
    }
}

/// Every property a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardAppearance {
    /// Distance the card's bottom edge sits below the container's bottom edge
    pub bottom_offset: f32,
    /// Radius of the card's top corners
    pub corner_radius: f32,
    /// Opacity of the dimming overlay behind the card
    pub overlay_opacity: f32,
}

impl Animatable for CardAppearance {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        CardAppearance {
            bottom_offset: f32::lerp(&from.bottom_offset, &to.bottom_offset, t),
            corner_radius: f32::lerp(&from.corner_radius, &to.corner_radius, t),
            overlay_opacity: f32::lerp(&from.overlay_opacity, &to.overlay_opacity, t)
                .clamp(0.0, 1.0),
        }
    }
}
