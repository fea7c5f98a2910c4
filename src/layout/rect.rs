use super::Size;

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
    }

    /// Split off the top `height` units, returning `(top, rest)`.
    /// The split point is clamped to the rectangle.
    pub fn split_top(&self, height: f32) -> (Rect, Rect) {
        let height = height.clamp(0.0, self.height.max(0.0));
        let top = Rect::new(self.x, self.y, self.width, height);
        let rest = Rect::new(self.x, self.y + height, self.width, self.height - height);
        (top, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(109.9, 69.9));
        assert!(!r.contains(110.0, 40.0));
        assert!(!r.contains(50.0, 70.0));
    }

    #[test]
    fn test_split_top() {
        let r = Rect::new(0.0, 200.0, 375.0, 600.0);
        let (header, body) = r.split_top(61.0);
        assert_eq!(header, Rect::new(0.0, 200.0, 375.0, 61.0));
        assert_eq!(body, Rect::new(0.0, 261.0, 375.0, 539.0));
    }

    #[test]
    fn test_split_top_clamps_to_height() {
        let r = Rect::from_size(Size::new(100.0, 40.0));
        let (header, body) = r.split_top(61.0);
        assert_eq!(header.height, 40.0);
        assert_eq!(body.height, 0.0);
        assert_eq!(body.min_y(), 40.0);
    }
}
