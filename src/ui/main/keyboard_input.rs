use crate::app::ShowcaseApp;
use slidekit::carousel::Key;

impl ShowcaseApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Text fields keep their arrow keys
        if ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.handle_key(Key::Escape);
            }
            return;
        }

        let keys: Vec<Key> = ctx.input(|i| {
            let mut keys = Vec::new();
            if i.key_pressed(egui::Key::ArrowLeft) {
                keys.push(Key::ArrowLeft);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                keys.push(Key::ArrowRight);
            }
            if i.key_pressed(egui::Key::Escape) {
                keys.push(Key::Escape);
            }
            keys
        });

        for key in keys {
            self.handle_key(key);
        }
    }
}
