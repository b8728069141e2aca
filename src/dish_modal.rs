use crate::carousel::Key;
use serde::{Deserialize, Serialize};

/// Detail card for a signature dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub title: String,
    pub story: String,
    pub ingredients: Vec<String>,
    pub pairing: String,
}

/// Dishes keyed by the identifier their menu buttons carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCatalog {
    dishes: Vec<(String, Dish)>,
}

impl DishCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the dish stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, dish: Dish) {
        let key = key.into();
        match self.dishes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = dish,
            None => self.dishes.push((key, dish)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, dish: Dish) -> Self {
        self.insert(key, dish);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Dish> {
        self.dishes.iter().find(|(k, _)| k == key).map(|(_, dish)| dish)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// Overlay with the story behind one dish.
#[derive(Debug, Default, Clone)]
pub struct DishModal {
    open: Option<String>,
}

impl DishModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_key(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Shows the dish under `key`. Unknown keys leave the modal as it was.
    pub fn open<'c>(&mut self, catalog: &'c DishCatalog, key: &str) -> Option<&'c Dish> {
        let Some(dish) = catalog.get(key) else {
            log::debug!("no dish details for '{}'", key);
            return None;
        };
        self.open = Some(key.to_string());
        Some(dish)
    }

    pub fn view<'c>(&self, catalog: &'c DishCatalog) -> Option<&'c Dish> {
        catalog.get(self.open.as_deref()?)
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// A click on the dimmed area around the card.
    pub fn click_backdrop(&mut self) {
        self.close();
    }

    /// Returns true when Escape closed the modal.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
