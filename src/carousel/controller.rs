use super::config::CarouselConfig;
use super::gesture::{classify_drag, SwipeDirection};
use super::input::InputEvent;
use super::render::{RenderFrame, RenderSink};
use super::slide::{Slide, SlideSet};
use super::state::{CarouselState, Phase};
use crate::errors::{Result, SlideError};
use crate::timer::{FiredTimer, TimerHandle, TimerPurpose, TimerService, VirtualTimers};
use std::time::Duration;

/// Slide index state, transition lock and autoplay for one carousel.
///
/// Every index change goes through [`begin_transition`](Self::begin_transition),
/// which holds the lock until the transition timer fires. Requests arriving in
/// the meantime are dropped, not queued. The controller owns its render sink
/// and timer handle; nothing else writes the index.
#[derive(Debug)]
pub struct SlideController<R: RenderSink, T: TimerService> {
    slides: SlideSet,
    config: CarouselConfig,
    state: CarouselState,
    render: R,
    timers: T,
    viewport_width: f32,
    transition_timer: Option<TimerHandle>,
    autoplay_timer: Option<TimerHandle>,
    hovered: bool,
    dragging: bool,
}

impl<R: RenderSink, T: TimerService> SlideController<R, T> {
    /// Renders slide 0 in place and arms autoplay when the config asks for it.
    pub fn new(slides: SlideSet, config: CarouselConfig, render: R, timers: T, viewport_width: f32) -> Self {
        let mut controller = Self {
            slides,
            config,
            state: CarouselState::new(false),
            render,
            timers,
            viewport_width,
            transition_timer: None,
            autoplay_timer: None,
            hovered: false,
            dragging: false,
        };

        controller.render_current(0, false);
        if controller.config.autoplay {
            controller.start_autoplay();
        }
        log::debug!(
            "carousel ready: {} slides, transition {}ms, autoplay {}",
            controller.slides.len(),
            controller.config.transition_ms,
            controller.state.autoplay_active
        );
        controller
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.state.autoplay_active
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide {
        // `current_index` never leaves `0..len`
        &self.slides[self.state.current_index]
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Progress-bar fraction in `(0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.state.current_index + 1) as f32 / self.slides.len() as f32
    }

    pub fn sink(&self) -> &R {
        &self.render
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    // Navigation
    pub fn next(&mut self) {
        if self.state.transitioning {
            tracing::trace!(index = self.state.current_index, "next dropped: transitioning");
            return;
        }
        let target = (self.state.current_index + 1) % self.slides.len();
        self.start_move(target);
    }

    pub fn prev(&mut self) {
        if self.state.transitioning {
            tracing::trace!(index = self.state.current_index, "prev dropped: transitioning");
            return;
        }
        let len = self.slides.len();
        let target = (self.state.current_index + len - 1) % len;
        self.start_move(target);
    }

    /// Moves to `index`. Out-of-range targets fail whatever the phase; the
    /// active index and requests made mid-transition are silent no-ops.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.state.transitioning || index == self.state.current_index {
            tracing::trace!(index, current = self.state.current_index, "go_to ignored");
            return Ok(());
        }
        self.start_move(index);
        Ok(())
    }

    /// Locks, moves to `target`, renders and arms the unlock timer. Ignored
    /// while a transition is already running.
    pub fn begin_transition(&mut self, target: usize) -> Result<()> {
        self.check_index(target)?;
        if self.state.transitioning {
            return Ok(());
        }
        self.start_move(target);
        Ok(())
    }

    fn start_move(&mut self, target: usize) {
        let previous = self.state.current_index;
        self.state.transitioning = true;
        self.state.current_index = target;
        self.render_current(previous, true);

        let handle = self
            .timers
            .schedule(self.config.transition_duration(), TimerPurpose::TransitionEnd);
        self.transition_timer = Some(handle);
        log::debug!("slide {} -> {}", previous, target);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Err(SlideError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        Ok(())
    }

    fn render_current(&mut self, previous: usize, animate: bool) {
        let frame = RenderFrame {
            current: self.state.current_index,
            previous,
            len: self.slides.len(),
            offset_px: -(self.state.current_index as f32) * self.viewport_width,
            animate,
            transition: if animate {
                self.config.transition_duration()
            } else {
                Duration::ZERO
            },
        };
        self.render.render(&frame);
    }

    // Autoplay
    /// Arms the repeating advance timer, replacing any previous one.
    pub fn start_autoplay(&mut self) {
        self.stop_autoplay();
        let handle = self
            .timers
            .schedule_repeating(self.config.autoplay_period(), TimerPurpose::Autoplay);
        self.autoplay_timer = Some(handle);
        self.state.autoplay_active = true;
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.timers.cancel(handle);
        }
        self.state.autoplay_active = false;
    }

    fn pause_for_interaction(&mut self) {
        if self.state.autoplay_active {
            self.stop_autoplay();
        }
    }

    fn resume_after_interaction(&mut self) {
        if self.config.autoplay && !self.hovered && !self.dragging {
            self.start_autoplay();
        }
    }

    // Layout
    /// Re-applies the offset for the current slide at the new width, without
    /// animating and without touching the index or the lock.
    pub fn resize(&mut self, width_px: f32) {
        self.viewport_width = width_px;
        let current = self.state.current_index;
        self.render_current(current, false);
    }

    /// Follows a scroll-snapped track that the user scrolled directly.
    pub fn sync_to_scroll(&mut self, offset_px: f32) {
        if self.viewport_width <= 0.0 || self.state.transitioning {
            return;
        }
        let last = self.slides.len() - 1;
        let index = ((offset_px / self.viewport_width).round().max(0.0) as usize).min(last);
        if index != self.state.current_index {
            let previous = self.state.current_index;
            self.state.current_index = index;
            self.render_current(previous, false);
        }
    }

    /// Single entry point for normalized input.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Next | InputEvent::KeyRight => self.next(),
            InputEvent::Prev | InputEvent::KeyLeft => self.prev(),
            InputEvent::Tap(index) => self.go_to(index)?,
            InputEvent::DragStart => {
                self.dragging = true;
                self.pause_for_interaction();
            }
            InputEvent::Drag { delta_px } => {
                self.dragging = false;
                match classify_drag(delta_px, self.config.swipe_threshold_px) {
                    Some(SwipeDirection::Next) => self.next(),
                    Some(SwipeDirection::Prev) => self.prev(),
                    None => {}
                }
                self.resume_after_interaction();
            }
            InputEvent::PointerEnter => {
                self.hovered = true;
                self.pause_for_interaction();
            }
            InputEvent::PointerLeave => {
                self.hovered = false;
                self.resume_after_interaction();
            }
            InputEvent::Resize { width_px } => self.resize(width_px),
            InputEvent::Scroll { offset_px } => self.sync_to_scroll(offset_px),
        }
        Ok(())
    }

    /// Reacts to an expired timer. Returns false for timers this controller
    /// does not own, so hosts can offer every expiry to every component.
    pub fn on_timer(&mut self, fired: &FiredTimer) -> bool {
        if self.transition_timer == Some(fired.handle) {
            self.transition_timer = None;
            self.state.transitioning = false;
            return true;
        }
        if self.autoplay_timer == Some(fired.handle) {
            self.next();
            return true;
        }
        false
    }

    /// Cancels every timer this controller armed.
    pub fn shutdown(&mut self) {
        self.stop_autoplay();
        if let Some(handle) = self.transition_timer.take() {
            self.timers.cancel(handle);
        }
        self.state.transitioning = false;
    }
}

impl<R: RenderSink> SlideController<R, VirtualTimers> {
    /// Drives a controller that owns its clock.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        while let Some(fired) = self.timers.pop_due(until) {
            self.on_timer(&fired);
        }
        self.timers.settle(until);
    }
}

impl<R: RenderSink, T: TimerService> Drop for SlideController<R, T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
