use super::input::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Classifies a horizontal drag. Only travel strictly beyond `threshold`
/// counts; leftwards travel advances, rightwards goes back.
pub fn classify_drag(delta_px: f32, threshold: f32) -> Option<SwipeDirection> {
    if delta_px.abs() <= threshold {
        return None;
    }
    if delta_px < 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Prev)
    }
}

/// Turns press/release positions from touch or mouse into carousel input.
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureTracker {
    start_x: Option<f32>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn press(&mut self, x: f32) -> InputEvent {
        self.start_x = Some(x);
        InputEvent::DragStart
    }

    /// Pointer released, or left the track mid-drag. Returns `None` when no
    /// press was seen.
    pub fn release(&mut self, x: f32) -> Option<InputEvent> {
        let start = self.start_x.take()?;
        Some(InputEvent::Drag { delta_px: x - start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_drag(50.0, 50.0), None);
        assert_eq!(classify_drag(-50.0, 50.0), None);
        assert_eq!(classify_drag(0.0, 50.0), None);
        assert_eq!(classify_drag(-50.5, 50.0), Some(SwipeDirection::Next));
        assert_eq!(classify_drag(51.0, 50.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.release(10.0), None);

        assert_eq!(tracker.press(300.0), InputEvent::DragStart);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.release(200.0), Some(InputEvent::Drag { delta_px: -100.0 }));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(200.0), None);
    }
}
