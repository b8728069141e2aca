//! Interactive building blocks for a restaurant marketing site: a carousel
//! controller with gestures and autoplay, a lightbox, dish and message
//! modals, a mobile navigation menu, toasts, a newsletter signup and a
//! contact form with client-side validation and rate limiting.
//!
//! Components never read a clock. They arm timers through
//! [`timer::TimerService`] and react when the host hands the expiry back.

pub mod carousel;
pub mod contact;
pub mod debounce;
pub mod dish_modal;
pub mod errors;
pub mod lightbox;
pub mod logging;
pub mod nav_menu;
pub mod newsletter;
pub mod settings;
pub mod timer;
pub mod toast;

pub use errors::{Result, SlideError};

#[cfg(test)]
mod tests;
