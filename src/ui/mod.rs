mod contact_form;
mod main;
mod nav_bar;

pub use main::animation::TrackView;
