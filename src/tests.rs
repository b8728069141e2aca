use crate::carousel::{CarouselConfig, FrameLog, GestureTracker, InputEvent, Key, SlideController, SlideSet};
use crate::contact::SubmitOutcome;
use crate::debounce::{Debouncer, RESIZE_DEBOUNCE};
use crate::dish_modal::{Dish, DishCatalog, DishModal};
use crate::lightbox::Lightbox;
use crate::nav_menu::NavMenu;
use crate::newsletter::{NewsletterError, NewsletterForm};
use crate::timer::{SharedTimers, TimerPurpose};
use crate::toast::{Toast, ToastKind, Toasts, TOAST_DURATION};
use std::time::Duration;

type PageCarousel = SlideController<FrameLog, SharedTimers>;

fn page_carousel(timers: &SharedTimers, len: usize, config: CarouselConfig) -> PageCarousel {
    let slides = SlideSet::from_sources((0..len).map(|i| format!("{i}.jpg"))).unwrap();
    SlideController::new(slides, config, FrameLog::default(), timers.clone(), 1000.0)
}

fn pump(timers: &SharedTimers, by: Duration, carousels: &mut [&mut PageCarousel]) {
    timers.advance(by, |fired| {
        for carousel in carousels.iter_mut() {
            if carousel.on_timer(&fired) {
                return;
            }
        }
    });
}

#[test]
fn carousels_on_one_page_share_no_state() {
    let timers = SharedTimers::new();
    let mut hero = page_carousel(&timers, 4, CarouselConfig::carousel());
    let mut gallery = page_carousel(&timers, 10, CarouselConfig::gallery());
    assert_eq!(timers.pending_with(TimerPurpose::Autoplay), 2);

    // 3.5s gallery period against 5s hero period
    pump(&timers, Duration::from_millis(3500), &mut [&mut hero, &mut gallery]);
    assert_eq!((hero.current_index(), gallery.current_index()), (0, 1));

    pump(&timers, Duration::from_millis(1500), &mut [&mut hero, &mut gallery]);
    assert_eq!((hero.current_index(), gallery.current_index()), (1, 1));

    hero.dispatch(InputEvent::PointerEnter).unwrap();
    pump(&timers, Duration::from_millis(7000), &mut [&mut hero, &mut gallery]);
    assert_eq!(hero.current_index(), 1);
    assert_eq!(gallery.current_index(), 3);
    assert!(gallery.is_autoplay_active());
}

#[test]
fn dropping_a_carousel_releases_its_timers() {
    let timers = SharedTimers::new();
    let hero = page_carousel(&timers, 3, CarouselConfig::carousel());
    assert_eq!(timers.pending(), 1);

    drop(hero);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn touch_swipe_end_to_end() {
    let timers = SharedTimers::new();
    let mut hero = page_carousel(&timers, 5, CarouselConfig::carousel());
    let mut touch = GestureTracker::new();

    hero.dispatch(touch.press(400.0)).unwrap();
    assert!(!hero.is_autoplay_active());
    let release = touch.release(320.0).unwrap();
    hero.dispatch(release).unwrap();
    assert_eq!(hero.current_index(), 1);
    assert!(hero.is_autoplay_active());

    pump(&timers, Duration::from_millis(500), &mut [&mut hero]);

    // A tap barely moves the finger
    hero.dispatch(touch.press(400.0)).unwrap();
    let tap = touch.release(420.0).unwrap();
    hero.dispatch(tap).unwrap();
    assert_eq!(hero.current_index(), 1);

    hero.dispatch(touch.press(100.0)).unwrap();
    let swipe_right = touch.release(300.0).unwrap();
    hero.dispatch(swipe_right).unwrap();
    assert_eq!(hero.current_index(), 0);
}

#[test]
fn resize_burst_closes_menu_once_settled() {
    let timers = SharedTimers::new();
    let mut hero = page_carousel(&timers, 3, CarouselConfig::carousel().with_autoplay(false));
    let mut resize = Debouncer::new(RESIZE_DEBOUNCE, timers.clone());
    let mut menu = NavMenu::new(992.0, 600.0);
    menu.toggle();

    for width in [700.0, 900.0, 1100.0, 1300.0] {
        hero.dispatch(InputEvent::Resize { width_px: width }).unwrap();
        resize.call(width);
        timers.advance(Duration::from_millis(50), |fired| {
            if let Some(w) = resize.on_timer(&fired) {
                menu.viewport_resized(w);
            }
        });
        assert!(menu.is_open());
    }
    assert_eq!(hero.sink().last().unwrap().offset_px, 0.0);

    timers.advance(Duration::from_millis(250), |fired| {
        if let Some(w) = resize.on_timer(&fired) {
            menu.viewport_resized(w);
        }
    });
    assert!(!menu.is_open());
}

#[test]
fn lightbox_opens_on_gallery_slide() {
    let timers = SharedTimers::new();
    let mut gallery = page_carousel(&timers, 10, CarouselConfig::gallery().with_autoplay(false));
    let mut lightbox = Lightbox::new();

    gallery.dispatch(InputEvent::Tap(6)).unwrap();
    let view = lightbox.open(gallery.slides(), gallery.current_index()).unwrap();
    assert_eq!(view.source, "6.jpg");
    assert!((gallery.progress() - 0.7).abs() < f32::EPSILON);

    assert!(lightbox.handle_key(Key::Escape));
    assert!(!lightbox.is_open());
}

#[test]
fn keys_are_ignored_mid_transition() {
    let timers = SharedTimers::new();
    let mut hero = page_carousel(&timers, 3, CarouselConfig::carousel().with_autoplay(false));

    for key in [Key::ArrowRight, Key::ArrowRight, Key::ArrowLeft, Key::Escape] {
        if let Some(event) = InputEvent::from_key(key) {
            hero.dispatch(event).unwrap();
        }
    }
    assert_eq!(hero.current_index(), 1);
    assert_eq!(hero.sink().indices(), vec![0, 1]);
}

#[test]
fn newsletter_toasts_share_the_page_clock_with_autoplay() {
    let timers = SharedTimers::new();
    let mut hero = page_carousel(&timers, 3, CarouselConfig::carousel());
    let mut toasts = Toasts::new(TOAST_DURATION, timers.clone());
    let mut signup = NewsletterForm::new();

    signup.email = "nope".to_string();
    let err = signup.begin_subscribe().unwrap_err();
    assert_eq!(err, NewsletterError::InvalidEmail);
    toasts.show(Toast::error(err.to_string()));

    signup.email = "guest@example.com".to_string();
    signup.begin_subscribe().unwrap();
    toasts.show(signup.finish_subscribe(SubmitOutcome::Delivered));
    let kinds: Vec<_> = toasts.visible().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Error, ToastKind::Success]);

    timers.advance(Duration::from_millis(5000), |fired| {
        if !hero.on_timer(&fired) {
            assert!(toasts.on_timer(&fired));
        }
    });
    assert!(toasts.is_empty());
    assert_eq!(hero.current_index(), 1);
}

#[test]
fn dish_modal_over_hero_slides() {
    let timers = SharedTimers::new();
    let hero = page_carousel(&timers, 2, CarouselConfig::carousel().with_autoplay(false));
    let catalog = DishCatalog::new().with(
        "0",
        Dish {
            title: "Deconstructed Samosa".to_string(),
            story: "Potato foam".to_string(),
            ingredients: vec!["Tamarind".to_string()],
            pairing: "Tea".to_string(),
        },
    );
    let mut modal = DishModal::new();

    let key = hero.current_slide().source.trim_end_matches(".jpg").to_string();
    assert_eq!(modal.open(&catalog, &key).unwrap().title, "Deconstructed Samosa");
    assert!(modal.open(&catalog, "1").is_none());
    assert_eq!(modal.open_key(), Some("0"));

    assert!(modal.handle_key(Key::Escape));
    assert!(!modal.scroll_locked());
}
