use crate::errors::{Result, SlideError};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Opaque slide content plus optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image path, URL or any other identifier the render side understands.
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Slide {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_caption(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.description = Some(description.into());
        self
    }
}

/// Fixed, non-empty, ordered set of slides. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(SlideError::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Untitled slides for each source.
    pub fn from_sources<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(sources.into_iter().map(Slide::new).collect())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Looks up `index`, failing with `OutOfRange` past the end.
    pub fn slide(&self, index: usize) -> Result<&Slide> {
        self.slides.get(index).ok_or(SlideError::OutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

impl Index<usize> for SlideSet {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sets_are_rejected() {
        let err = SlideSet::new(Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_SLIDE_SET");
    }

    #[test]
    fn lookups_past_the_end_fail() {
        let set = SlideSet::from_sources(["a.jpg", "b.jpg"]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.slide(1).unwrap().source, "b.jpg");
        assert_eq!(set[0].source, "a.jpg");
        assert!(matches!(
            set.slide(2),
            Err(SlideError::OutOfRange { index: 2, len: 2 })
        ));
    }
}
