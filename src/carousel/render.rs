use std::time::Duration;

/// Everything a view needs to draw the carousel after a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub current: usize,
    pub previous: usize,
    pub len: usize,
    /// Track translation; `-(current * viewport width)`.
    pub offset_px: f32,
    /// False for resize and scroll re-syncs, which must jump without easing.
    pub animate: bool,
    pub transition: Duration,
}

impl RenderFrame {
    /// Exactly one slide and one indicator are active: the current one.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.len as f32
    }
}

/// The visual side of a carousel.
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Sink that only records frames. Handy for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct FrameLog {
    pub frames: Vec<RenderFrame>,
}

impl FrameLog {
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.current).collect()
    }
}

impl RenderSink for FrameLog {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(*frame);
    }
}
