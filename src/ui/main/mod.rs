// Submodules for main UI functionality
pub mod main_ui;
pub mod keyboard_input;
pub mod slideshow;
pub mod animation;
pub mod lightbox;
pub mod dialogs;
pub mod toasts;
