use crate::app::ShowcaseApp;
use egui::{self, Color32, CornerRadius, Margin, RichText};
use slidekit::toast::ToastKind;

fn toast_color(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Info => Color32::from_rgb(52, 152, 219),
        ToastKind::Success => Color32::from_rgb(39, 174, 96),
        ToastKind::Error => Color32::from_rgb(192, 57, 43),
    }
}

impl ShowcaseApp {
    pub(crate) fn render_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.toasts.visible() {
                    egui::Frame::NONE
                        .fill(toast_color(toast.kind))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
