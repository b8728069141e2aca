use slidekit::carousel::{RenderFrame, RenderSink};

/// Render sink for an egui carousel track. Frames arrive from the controller
/// without a clock, so the first paint after an animated frame stamps the
/// start time.
#[derive(Debug, Default)]
pub struct TrackView {
    frame: Option<RenderFrame>,
    from_offset: f32,
    started_at: Option<f64>,
    needs_stamp: bool,
}

impl RenderSink for TrackView {
    fn render(&mut self, frame: &RenderFrame) {
        let target_before = self.frame.map(|f| f.offset_px).unwrap_or(frame.offset_px);
        self.frame = Some(*frame);
        if frame.animate {
            self.from_offset = target_before;
            self.needs_stamp = true;
        } else {
            self.from_offset = frame.offset_px;
            self.needs_stamp = false;
            self.started_at = None;
        }
    }
}

impl TrackView {
    /// Track offset to paint at `time` (seconds, egui clock).
    pub fn offset_at(&mut self, time: f64) -> f32 {
        let Some(frame) = self.frame else {
            return 0.0;
        };
        if self.needs_stamp {
            self.started_at = Some(time);
            self.needs_stamp = false;
        }
        let Some(start) = self.started_at else {
            return frame.offset_px;
        };

        let duration = frame.transition.as_secs_f64();
        if duration <= 0.0 {
            return frame.offset_px;
        }
        let t = ((time - start) / duration).clamp(0.0, 1.0) as f32;
        // Ease-out cubic, close to the site's cubic-bezier(0.25, 0.46, 0.45, 0.94)
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from_offset + (frame.offset_px - self.from_offset) * eased
    }

    pub fn is_animating(&self, time: f64) -> bool {
        match (self.frame, self.started_at) {
            (Some(frame), Some(start)) => time - start < frame.transition.as_secs_f64(),
            (Some(_), None) => self.needs_stamp,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(current: usize, animate: bool) -> RenderFrame {
        RenderFrame {
            current,
            previous: 0,
            len: 4,
            offset_px: -(current as f32) * 100.0,
            animate,
            transition: if animate { Duration::from_millis(500) } else { Duration::ZERO },
        }
    }

    #[test]
    fn eases_from_previous_target() {
        let mut view = TrackView::default();
        view.render(&frame(0, false));
        view.render(&frame(1, true));

        assert_eq!(view.offset_at(10.0), 0.0);
        assert!(view.is_animating(10.25));
        let mid = view.offset_at(10.25);
        assert!(mid < 0.0 && mid > -100.0);
        assert_eq!(view.offset_at(10.5), -100.0);
        assert!(!view.is_animating(10.6));
    }

    #[test]
    fn jumps_without_animation() {
        let mut view = TrackView::default();
        view.render(&frame(2, false));
        assert_eq!(view.offset_at(1.0), -200.0);
        assert!(!view.is_animating(1.0));
    }
}
