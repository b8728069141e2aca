use super::{Section, ShowcaseApp};
use slidekit::carousel::{InputEvent, Key};
use std::time::Duration;

impl ShowcaseApp {
    /// Moves the page clock forward and hands each expiry to its owner.
    pub fn pump_timers(&mut self, dt: Duration) {
        let timers = self.timers.clone();
        timers.advance(dt, |fired| {
            if self.hero.on_timer(&fired)
                || self.gallery.on_timer(&fired)
                || self.toasts.on_timer(&fired)
            {
                return;
            }
            if let Some(width) = self.resize.on_timer(&fired) {
                if self.nav.viewport_resized(width).is_some() {
                    log::debug!("nav menu closed at width {}", width);
                }
            }
        });
    }

    /// Carousels follow the layout width immediately; the menu only sees the
    /// debounced value.
    pub fn on_viewport_width(&mut self, width: f32) {
        if (width - self.viewport_width).abs() < 0.5 {
            return;
        }
        self.viewport_width = width;
        self.resize.call(width);
    }

    /// Switches the visible section. The carousel that scrolls out of view
    /// gets a pointer-leave so hover state never outlives it.
    pub fn show_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        for (hovered, carousel) in [
            (&mut self.hero_hovered, &mut self.hero),
            (&mut self.gallery_hovered, &mut self.gallery),
        ] {
            if std::mem::take(hovered) {
                if let Err(e) = carousel.dispatch(InputEvent::PointerLeave) {
                    e.log_and_report();
                }
            }
        }
        self.section = section;
    }

    /// Any open overlay freezes page scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.lightbox.scroll_locked()
            || self.dish_modal.scroll_locked()
            || self.message_modal.scroll_locked()
            || self.nav.scroll_locked()
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape {
            let closed_overlay = self.dish_modal.handle_key(key)
                || self.message_modal.handle_key(key)
                || self.lightbox.handle_key(key);
            if !closed_overlay {
                self.nav.handle_key(key);
            }
            return;
        }

        let Some(event) = InputEvent::from_key(key) else {
            return;
        };
        // Arrows drive the carousel of the visible section only
        let target = match self.section {
            Section::Home => &mut self.hero,
            Section::Gallery => &mut self.gallery,
            Section::Contact => return,
        };
        if let Err(e) = target.dispatch(event) {
            e.log_and_report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dish_key;
    use slidekit::settings::Settings;
    use slidekit::toast::{Toast, TOAST_DURATION};

    fn app(dir: &tempfile::TempDir) -> ShowcaseApp {
        ShowcaseApp::from_settings(Settings::default(), dir.path().join("rate_limit.json")).unwrap()
    }

    #[test]
    fn leaving_a_section_clears_its_hover() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        app.show_section(Section::Gallery);
        app.gallery_hovered = true;
        app.gallery.dispatch(InputEvent::PointerEnter).unwrap();
        assert!(!app.gallery.is_autoplay_active());

        app.show_section(Section::Home);
        assert!(!app.gallery_hovered);
        assert!(app.gallery.is_autoplay_active());

        app.handle_key(Key::ArrowRight);
        assert_eq!(app.hero.current_index(), 1);
        assert_eq!(app.gallery.current_index(), 0);
    }

    #[test]
    fn arrows_only_reach_the_visible_carousel() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        app.show_section(Section::Contact);
        app.handle_key(Key::ArrowLeft);
        assert_eq!(app.hero.current_index(), 0);
        assert_eq!(app.gallery.current_index(), 0);

        app.show_section(Section::Gallery);
        app.handle_key(Key::ArrowLeft);
        assert_eq!(app.gallery.current_index(), 9);
        assert_eq!(app.hero.current_index(), 0);
    }

    #[test]
    fn escape_closes_the_topmost_overlay_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.nav.toggle();
        app.dish_modal.open(&app.dishes, "samosa").unwrap();
        assert!(app.scroll_locked());

        app.handle_key(Key::Escape);
        assert!(!app.dish_modal.is_open());
        assert!(app.nav.is_open());

        app.handle_key(Key::Escape);
        assert!(!app.nav.is_open());
        assert!(!app.scroll_locked());
    }

    #[test]
    fn toasts_expire_on_the_page_clock() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.toasts.show(Toast::info("Subscribing..."));

        app.pump_timers(TOAST_DURATION - Duration::from_millis(1));
        assert_eq!(app.toasts.len(), 1);
        app.pump_timers(Duration::from_millis(1));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn every_dish_key_matches_a_hero_slide() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);
        let keys: Vec<_> = app
            .hero
            .slides()
            .iter()
            .filter_map(|slide| dish_key(&slide.source))
            .filter(|key| app.dishes.contains(key))
            .collect();
        assert_eq!(keys, vec!["samosa", "rogan-josh"]);
    }
}
