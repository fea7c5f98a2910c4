use crate::layout::{Constraints, Size};

/// Something that renders into the card's content region.
///
/// The card owns the region below its header and lays the content out to
/// fill it, with tight constraints, on every layout pass. Content is also
/// asked for its natural height once when the card is sized with
/// [`CardSizing::Scrollable`](super::CardSizing::Scrollable).
pub trait CardContent {
    /// Size the content within `constraints` and return the size it took.
    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Place the content's top-left corner.
    fn set_origin(&mut self, x: f32, y: f32);

    /// Called once when the card tears down.
    fn detach(&mut self) {}
}

/// Content that takes whatever space it's given and draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyContent;

impl CardContent for EmptyContent {
    fn layout(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(Size::zero())
    }

    fn set_origin(&mut self, _x: f32, _y: f32) {}
}
