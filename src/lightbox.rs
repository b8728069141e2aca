use crate::carousel::{Key, SlideSet};
use crate::errors::Result;

/// What the lightbox overlay shows for the open slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub index: usize,
    pub source: String,
    pub title: String,
    pub description: String,
}

/// Full-screen overlay for a single gallery item.
#[derive(Debug, Default, Clone)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Page scrolling is locked while the overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn open(&mut self, slides: &SlideSet, index: usize) -> Result<LightboxView> {
        let slide = slides.slide(index)?;
        self.open = Some(index);
        log::debug!("lightbox opened on {}", slide.source);
        Ok(LightboxView {
            index,
            source: slide.source.clone(),
            title: slide.title.clone().unwrap_or_default(),
            description: slide.description.clone().unwrap_or_default(),
        })
    }

    pub fn view(&self, slides: &SlideSet) -> Option<LightboxView> {
        let index = self.open?;
        let slide = slides.get(index)?;
        Some(LightboxView {
            index,
            source: slide.source.clone(),
            title: slide.title.clone().unwrap_or_default(),
            description: slide.description.clone().unwrap_or_default(),
        })
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Backdrop or close-button click.
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// Escape closes an open lightbox. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
