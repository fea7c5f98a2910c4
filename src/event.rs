//! Pointer input delivered to the card by the host event loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer moved
    MouseMove { x: f32, y: f32 },
    /// Pointer button pressed (or touch began)
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Pointer button released (or touch ended)
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Pointer left the surface; any tracked press is abandoned
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl EventResponse {
    pub fn is_handled(self) -> bool {
        self == EventResponse::Handled
    }
}
