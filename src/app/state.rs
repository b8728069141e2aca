use crate::ui::TrackView;

use anyhow::Context as _;
use eframe::egui;
use slidekit::carousel::{GestureTracker, Slide, SlideController, SlideSet};
use slidekit::contact::{
    ContactFormHandler, FieldError, FormStatus, JsonFileStore, MessageModal, RateLimiter,
};
use slidekit::debounce::Debouncer;
use slidekit::dish_modal::{Dish, DishCatalog, DishModal};
use slidekit::lightbox::Lightbox;
use slidekit::nav_menu::NavMenu;
use slidekit::newsletter::NewsletterForm;
use slidekit::settings::Settings;
use slidekit::timer::SharedTimers;
use slidekit::toast::{Toasts, TOAST_DURATION};
use std::path::{Path, PathBuf};

pub type Carousel = SlideController<TrackView, SharedTimers>;

/// Width the carousels assume until the first layout pass reports a real one.
const INITIAL_WIDTH: f32 = 960.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Gallery,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[Section::Home, Section::Gallery, Section::Contact]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
        }
    }
}

pub struct ShowcaseApp {
    // Settings
    pub settings: Settings,

    // One clock for every component on the page
    pub timers: SharedTimers,

    // Carousels
    pub hero: Carousel,
    pub gallery: Carousel,
    pub hero_gesture: GestureTracker,
    pub gallery_gesture: GestureTracker,
    pub hero_hovered: bool,
    pub gallery_hovered: bool,

    // Overlays and navigation
    pub lightbox: Lightbox,
    pub dishes: DishCatalog,
    pub dish_modal: DishModal,
    pub toasts: Toasts<SharedTimers>,
    pub nav: NavMenu,
    pub resize: Debouncer<f32, SharedTimers>,
    pub section: Section,
    pub viewport_width: f32,
    pub scroll_y: f32,

    // Contact form
    pub contact: ContactFormHandler<JsonFileStore>,
    pub form_errors: Vec<FieldError>,
    pub form_status: Option<FormStatus>,
    pub captcha_checked: bool,

    // Message dialog and newsletter
    pub message_modal: MessageModal,
    pub message_captcha_checked: bool,
    pub newsletter: NewsletterForm,
}

impl ShowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> anyhow::Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let store_path = Settings::rate_limit_path()
            .unwrap_or_else(|| std::env::temp_dir().join("slidekit_rate_limit.json"));
        let app = Self::from_settings(settings, store_path)?;
        log::info!("showcase started");
        Ok(app)
    }

    /// Builds every component on one page clock, keeping the contact-form
    /// rate limit at `store_path`.
    pub fn from_settings(settings: Settings, store_path: PathBuf) -> anyhow::Result<Self> {
        let timers = SharedTimers::new();

        let hero = SlideController::new(
            hero_slides().context("building hero slides")?,
            settings.carousel.clone(),
            TrackView::default(),
            timers.clone(),
            INITIAL_WIDTH,
        );
        let gallery = SlideController::new(
            gallery_slides().context("building gallery slides")?,
            settings.gallery.clone(),
            TrackView::default(),
            timers.clone(),
            INITIAL_WIDTH,
        );

        let limiter = RateLimiter::new(settings.rate_limit_max, settings.rate_limit_window());
        let contact = ContactFormHandler::new(
            settings.form_access_key.clone(),
            limiter,
            JsonFileStore::new(store_path),
        );

        let message_modal = MessageModal::new(settings.form_access_key.clone());
        let toasts = Toasts::new(TOAST_DURATION, timers.clone());
        let resize = Debouncer::new(settings.resize_debounce(), timers.clone());
        let nav = NavMenu::new(settings.nav_breakpoint_px, INITIAL_WIDTH);

        Ok(Self {
            settings,
            timers,
            hero,
            gallery,
            hero_gesture: GestureTracker::new(),
            gallery_gesture: GestureTracker::new(),
            hero_hovered: false,
            gallery_hovered: false,
            lightbox: Lightbox::new(),
            dishes: dish_catalog(),
            dish_modal: DishModal::new(),
            toasts,
            nav,
            resize,
            section: Section::Home,
            viewport_width: INITIAL_WIDTH,
            scroll_y: 0.0,
            contact,
            form_errors: Vec::new(),
            form_status: None,
            captcha_checked: false,
            message_modal,
            message_captcha_checked: false,
            newsletter: NewsletterForm::new(),
        })
    }
}

/// Hero slides and dish cards share a key: the image file stem.
pub fn dish_key(source: &str) -> Option<&str> {
    Path::new(source).file_stem().and_then(|stem| stem.to_str())
}

fn dish(title: &str, story: &str, ingredients: &[&str], pairing: &str) -> Dish {
    Dish {
        title: title.to_string(),
        story: story.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        pairing: pairing.to_string(),
    }
}

fn dish_catalog() -> DishCatalog {
    DishCatalog::new()
        .with(
            "samosa",
            dish(
                "Deconstructed Samosa",
                "A grandmother's roadside samosa stall, retold with a potato foam carrying \
                 fourteen spices from her blend and a tamarind gel standing in for the \
                 after-school chutney.",
                &["Organic potatoes", "Heirloom spices", "Tamarind reduction", "Filo crisp"],
                "Darjeeling First Flush Tea",
            ),
        )
        .with(
            "rogan-josh",
            dish(
                "Saffron-Infused Rogan Josh",
                "Lamb cooked for seventy-two hours, learned during an apprenticeship in \
                 Kashmir, finished with saffron from Pampore and hand-pressed rose petals.",
                &["New Zealand lamb rack", "Kashmiri saffron", "Rose petals", "Heirloom garlic"],
                "Sommelier-selected Syrah",
            ),
        )
}

fn hero_slides() -> slidekit::Result<SlideSet> {
    SlideSet::new(vec![
        Slide::new("dishes/samosa.jpg").with_caption(
            "Deconstructed Samosa",
            "Potato foam with fourteen spices and a tamarind gel.",
        ),
        Slide::new("dishes/rogan-josh.jpg").with_caption(
            "Saffron-Infused Rogan Josh",
            "Seventy-two hour lamb, Kashmiri saffron, pressed rose petals.",
        ),
        Slide::new("dishes/chaat.jpg").with_caption(
            "Smoked Papdi Chaat",
            "Yoghurt spheres, pomegranate, charred chickpeas.",
        ),
        Slide::new("dishes/kulfi.jpg").with_caption(
            "Pistachio Kulfi",
            "Slow-reduced milk, cardamom, edible silver.",
        ),
    ])
}

fn gallery_slides() -> slidekit::Result<SlideSet> {
    let captions = [
        ("The Pass", "Service at full tilt"),
        ("Spice Room", "Fourteen-spice blend, ground daily"),
        ("Tandoor", "Clay oven at 480°C"),
        ("Garden", "Herbs picked before service"),
        ("Pastry", "Laminated dough, three days"),
        ("Chef's Table", "Eight seats facing the line"),
        ("Market", "Morning run for produce"),
        ("Cellar", "Pairings for the tasting menu"),
        ("Plating", "Tweezers and patience"),
        ("Dining Room", "Evening light"),
    ];
    SlideSet::new(
        captions
            .iter()
            .enumerate()
            .map(|(i, (title, description))| {
                Slide::new(format!("gallery/{:02}.jpg", i + 1)).with_caption(*title, *description)
            })
            .collect(),
    )
}
