use super::state::{CardAppearance, CardState};
use crate::animation::{AnimatingPosition, PropertyAnimator};

/// One transition toward a resting state: the animator plus the state it
/// was built to reach.
#[derive(Debug)]
pub struct TransitionHandle {
    pub(crate) target: CardState,
    pub(crate) animator: PropertyAnimator<CardAppearance>,
}

impl TransitionHandle {
    pub fn target(&self) -> CardState {
        self.target
    }

    pub fn animator(&self) -> &PropertyAnimator<CardAppearance> {
        &self.animator
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// State the card rests in once this transition finishes at `position`.
    /// `None` means the card stays where it was.
    pub fn resolve(&self, position: AnimatingPosition) -> Option<CardState> {
        match position {
            AnimatingPosition::Start => Some(self.target.opposite()),
            AnimatingPosition::End => Some(self.target),
            AnimatingPosition::Current => None,
        }
    }
}
