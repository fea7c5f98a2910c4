mod constraints;
mod rect;

pub use constraints::{Constraints, Size};
pub use rect::Rect;
