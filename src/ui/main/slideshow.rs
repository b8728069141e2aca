use crate::app::Carousel;
use egui::{self, Align2, Color32, CornerRadius, FontId, Rect, Sense, Vec2};
use slidekit::carousel::{GestureTracker, InputEvent};

/// What the view asked for beyond carousel navigation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackResponse {
    pub double_clicked: Option<usize>,
}

fn slide_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(120, 60, 40),
        Color32::from_rgb(170, 110, 40),
        Color32::from_rgb(60, 100, 70),
        Color32::from_rgb(90, 70, 130),
        Color32::from_rgb(40, 90, 130),
        Color32::from_rgb(140, 50, 80),
    ];
    PALETTE[index % PALETTE.len()]
}

fn send(carousel: &mut Carousel, event: InputEvent) {
    if let Err(e) = carousel.dispatch(event) {
        e.log_and_report();
    }
}

/// Paints the sliding track and feeds pointer input back to the controller.
pub fn render_track(
    ui: &mut egui::Ui,
    carousel: &mut Carousel,
    gesture: &mut GestureTracker,
    hovered: &mut bool,
    height: f32,
) -> TrackResponse {
    let mut result = TrackResponse::default();
    let width = ui.available_width().max(1.0);
    if (carousel.viewport_width() - width).abs() > 0.5 {
        send(carousel, InputEvent::Resize { width_px: width });
    }

    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click_and_drag());
    let time = ui.input(|i| i.time);
    let offset = carousel.sink_mut().offset_at(time);
    if carousel.sink().is_animating(time) {
        ui.ctx().request_repaint();
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(8), Color32::from_rgb(20, 20, 24));
    let current = carousel.current_index();
    for (i, slide) in carousel.slides().iter().enumerate() {
        let min = rect.left_top() + Vec2::new(i as f32 * width + offset, 0.0);
        let slide_rect = Rect::from_min_size(min, rect.size());
        if !slide_rect.intersects(rect) {
            continue;
        }

        let fill = if i == current {
            slide_color(i)
        } else {
            slide_color(i).gamma_multiply(0.7)
        };
        painter.rect_filled(slide_rect.shrink(4.0), CornerRadius::same(8), fill);
        painter.text(
            slide_rect.center() - Vec2::new(0.0, 14.0),
            Align2::CENTER_CENTER,
            slide.title.as_deref().unwrap_or(&slide.source),
            FontId::proportional(26.0),
            Color32::WHITE,
        );
        if let Some(description) = &slide.description {
            painter.text(
                slide_rect.center() + Vec2::new(0.0, 18.0),
                Align2::CENTER_CENTER,
                description,
                FontId::proportional(14.0),
                Color32::from_gray(220),
            );
        }
    }

    // Hover pauses autoplay
    let pointer_inside = ui.rect_contains_pointer(rect);
    if pointer_inside != *hovered {
        *hovered = pointer_inside;
        let event = if pointer_inside {
            InputEvent::PointerEnter
        } else {
            InputEvent::PointerLeave
        };
        send(carousel, event);
    }

    // Drag and swipe
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let event = gesture.press(pos.x);
            send(carousel, event);
        }
    }
    if response.drag_stopped() {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()));
        if let Some(event) = pos.and_then(|p| gesture.release(p.x)) {
            send(carousel, event);
        }
    }

    if response.double_clicked() {
        result.double_clicked = Some(current);
    }
    result
}

/// Previous/next buttons with one indicator dot per slide.
pub fn render_controls(ui: &mut egui::Ui, carousel: &mut Carousel) {
    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous slide").clicked() {
            send(carousel, InputEvent::Prev);
        }
        let current = carousel.current_index();
        for i in 0..carousel.len() {
            let dot = ui
                .add(egui::RadioButton::new(i == current, ""))
                .on_hover_text(format!("Go to slide {}", i + 1));
            if dot.clicked() {
                send(carousel, InputEvent::Tap(i));
            }
        }
        if ui.button("▶").on_hover_text("Next slide").clicked() {
            send(carousel, InputEvent::Next);
        }
    });
}
