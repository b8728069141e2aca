use super::slideshow::{render_controls, render_track};
use crate::app::{dish_key, Section, ShowcaseApp};
use egui::{self, RichText};
use std::time::Duration;

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance autoplay, transition and debounce timers
        let dt = ctx.input(|i| i.stable_dt).max(0.0);
        self.pump_timers(Duration::from_secs_f32(dt));

        self.on_viewport_width(ctx.screen_rect().width());
        self.handle_keyboard(ctx);

        self.render_nav_bar(ctx);
        self.render_main_view(ctx);
        self.render_lightbox(ctx);
        self.render_dish_modal(ctx);
        self.render_message_modal(ctx);
        self.render_toasts(ctx);

        // Timers need frames even when nothing moves
        ctx.request_repaint_after(Duration::from_millis(50));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.hero.shutdown();
        self.gallery.shutdown();
        self.resize.cancel();
        self.toasts.clear();
        self.settings.save();
    }
}

impl ShowcaseApp {
    fn render_main_view(&mut self, ctx: &egui::Context) {
        let locked = self.scroll_locked();
        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .enable_scrolling(!locked)
                .show(ui, |ui| match self.section {
                    Section::Home => self.render_home(ui),
                    Section::Gallery => self.render_gallery(ui),
                    Section::Contact => self.render_contact_form(ui),
                });
            self.scroll_y = output.state.offset.y;
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.heading("Signature dishes");
        ui.add_space(8.0);

        let response = render_track(
            ui,
            &mut self.hero,
            &mut self.hero_gesture,
            &mut self.hero_hovered,
            320.0,
        );
        render_controls(ui, &mut self.hero);
        if response.double_clicked.is_some() {
            self.show_section(Section::Gallery);
        }

        ui.add_space(16.0);
        let slide = self.hero.current_slide();
        if let Some(story) = &slide.description {
            ui.label(RichText::new(story).italics());
        }

        let key = dish_key(&slide.source).map(str::to_string);
        let has_story = key.as_deref().is_some_and(|k| self.dishes.contains(k));
        ui.add_space(8.0);
        let story = ui.add_enabled(has_story, egui::Button::new("The story behind this dish"));
        if story.clicked() {
            if let Some(key) = key {
                self.dish_modal.open(&self.dishes, &key);
            }
        }
    }

    fn render_gallery(&mut self, ui: &mut egui::Ui) {
        ui.heading("Gallery");
        ui.add_space(8.0);

        let response = render_track(
            ui,
            &mut self.gallery,
            &mut self.gallery_gesture,
            &mut self.gallery_hovered,
            360.0,
        );
        ui.add(egui::ProgressBar::new(self.gallery.progress()).desired_height(4.0));
        render_controls(ui, &mut self.gallery);

        if let Some(index) = response.double_clicked {
            self.open_lightbox(index);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Click a tile to show it, Ctrl+click to enlarge").small());

        let mut clicked = None;
        let current = self.gallery.current_index();
        ui.horizontal_wrapped(|ui| {
            for (i, slide) in self.gallery.slides().iter().enumerate() {
                let title = slide.title.as_deref().unwrap_or(&slide.source);
                let tile = ui.add_sized(
                    [140.0, 90.0],
                    egui::Button::new(title).selected(i == current),
                );
                if tile.clicked() {
                    clicked = Some((i, ui.input(|inp| inp.modifiers.command)));
                }
            }
        });

        match clicked {
            Some((index, true)) => self.open_lightbox(index),
            Some((index, false)) => {
                if let Err(e) = self.gallery.go_to(index) {
                    e.log_and_report();
                }
            }
            None => {}
        }
    }

    fn open_lightbox(&mut self, index: usize) {
        if let Err(e) = self.lightbox.open(self.gallery.slides(), index) {
            e.log_and_report();
        }
    }
}
