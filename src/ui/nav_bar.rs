use crate::app::{Section, ShowcaseApp};
use egui::{self, Color32, Margin, RichText};
use slidekit::nav_menu::header_scrolled;

impl ShowcaseApp {
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let scrolled = header_scrolled(self.scroll_y, self.settings.header_scroll_threshold_px);
        let fill = if scrolled {
            Color32::from_rgb(12, 12, 14)
        } else {
            Color32::from_rgb(28, 28, 32)
        };

        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::NONE.fill(fill).inner_margin(Margin::symmetric(12, 8)))
            .show(ctx, |ui| {
                let mut picked = None;
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Chef's Table").size(18.0).strong().color(Color32::WHITE));
                    ui.add_space(16.0);

                    if self.nav.is_mobile() {
                        let toggle = ui
                            .selectable_label(self.nav.is_open(), "☰")
                            .on_hover_text("Menu");
                        if toggle.clicked() {
                            self.nav.toggle();
                        }
                    } else {
                        for section in Section::all() {
                            if ui.selectable_label(self.section == *section, section.label()).clicked() {
                                picked = Some(*section);
                            }
                        }
                    }
                });

                if self.nav.is_mobile() && self.nav.is_open() {
                    ui.vertical(|ui| {
                        for section in Section::all() {
                            if ui.selectable_label(self.section == *section, section.label()).clicked() {
                                picked = Some(*section);
                            }
                        }
                    });
                }

                if let Some(section) = picked {
                    self.show_section(section);
                    self.nav.link_clicked();
                }
            });
    }
}
