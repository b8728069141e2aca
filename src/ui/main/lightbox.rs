use crate::app::ShowcaseApp;
use egui::{self, Color32, CornerRadius, RichText, Sense, Vec2};

impl ShowcaseApp {
    pub(crate) fn render_lightbox(&mut self, ctx: &egui::Context) {
        let Some(view) = self.lightbox.view(self.gallery.slides()) else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("lightbox")).show(ctx, |ui| {
            let size = Vec2::new(640.0, 420.0).min(ctx.screen_rect().size() * 0.8);
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            ui.painter().rect_filled(
                rect,
                CornerRadius::same(8),
                Color32::from_rgb(60, 60, 70),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &view.source,
                egui::FontId::monospace(14.0),
                Color32::from_gray(200),
            );

            ui.add_space(8.0);
            ui.label(RichText::new(&view.title).size(18.0).strong());
            ui.label(RichText::new(&view.description).color(Color32::GRAY));
            ui.add_space(4.0);
            ui.button("Close").clicked()
        });

        if modal.inner || modal.should_close() {
            self.lightbox.click_outside();
        }
    }
}
