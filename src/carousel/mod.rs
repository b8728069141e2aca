//! Carousel and slideshow control: one parameterized controller shared by the
//! hero carousel and the gallery.

pub mod config;
pub mod controller;
pub mod gesture;
pub mod input;
pub mod render;
pub mod slide;
pub mod state;

pub use config::CarouselConfig;
pub use controller::SlideController;
pub use gesture::{classify_drag, GestureTracker, SwipeDirection};
pub use input::{InputEvent, Key};
pub use render::{FrameLog, RenderFrame, RenderSink};
pub use slide::{Slide, SlideSet};
pub use state::{CarouselState, Phase};
