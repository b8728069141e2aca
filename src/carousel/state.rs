/// The two phases of a carousel.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Idle,          // Accepting navigation requests
    Transitioning, // Move animation running, requests are dropped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub transitioning: bool,
    pub autoplay_active: bool,
}

impl CarouselState {
    pub fn new(autoplay_active: bool) -> Self {
        Self {
            current_index: 0,
            transitioning: false,
            autoplay_active,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }
}
