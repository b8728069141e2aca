/// Keys the interactive components care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Normalized input for a carousel. Raw pointer, touch and keyboard capture
/// happens in the host; everything arrives here in one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Next button.
    Next,
    /// Previous button.
    Prev,
    /// Indicator dot or thumbnail click.
    Tap(usize),
    /// Pointer or touch went down on the track.
    DragStart,
    /// Pointer or touch released; `delta_px` is end minus start on the x axis.
    Drag { delta_px: f32 },
    KeyLeft,
    KeyRight,
    PointerEnter,
    PointerLeave,
    Resize { width_px: f32 },
    /// A scroll-snapped track reports its horizontal scroll position.
    Scroll { offset_px: f32 },
}

impl InputEvent {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(InputEvent::KeyLeft),
            Key::ArrowRight => Some(InputEvent::KeyRight),
            Key::Escape | Key::Other => None,
        }
    }
}
