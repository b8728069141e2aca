use crate::carousel::Key;

pub const MOBILE_BREAKPOINT_PX: f32 = 992.0;
pub const HEADER_SCROLL_THRESHOLD_PX: f32 = 50.0;

/// Result of an open/close request, for the view to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChange {
    pub open: bool,
    /// `aria-expanded` on the toggle button.
    pub expanded: bool,
    /// Body scrolling is locked only for an open menu on a mobile viewport.
    pub scroll_locked: bool,
}

/// Collapsible primary navigation for narrow viewports.
#[derive(Debug, Clone)]
pub struct NavMenu {
    open: bool,
    breakpoint_px: f32,
    viewport_width: f32,
}

impl NavMenu {
    pub fn new(breakpoint_px: f32, viewport_width: f32) -> Self {
        Self {
            open: false,
            breakpoint_px,
            viewport_width,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.breakpoint_px
    }

    pub fn scroll_locked(&self) -> bool {
        self.open && self.is_mobile()
    }

    pub fn toggle(&mut self) -> MenuChange {
        self.set_open(!self.open)
    }

    pub fn set_open(&mut self, open: bool) -> MenuChange {
        self.open = open;
        MenuChange {
            open,
            expanded: open,
            scroll_locked: open && self.is_mobile(),
        }
    }

    /// Following any link inside the menu closes it.
    pub fn link_clicked(&mut self) -> MenuChange {
        self.set_open(false)
    }

    pub fn handle_key(&mut self, key: Key) -> Option<MenuChange> {
        if key == Key::Escape && self.open {
            return Some(self.set_open(false));
        }
        None
    }

    /// Fed from a debounced resize. Growing past the breakpoint closes the
    /// menu.
    pub fn viewport_resized(&mut self, width_px: f32) -> Option<MenuChange> {
        self.viewport_width = width_px;
        if width_px > self.breakpoint_px && self.open {
            return Some(self.set_open(false));
        }
        None
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX, MOBILE_BREAKPOINT_PX)
    }
}

/// Sticky header style kicks in once the page has scrolled.
pub fn header_scrolled(scroll_y: f32, threshold_px: f32) -> bool {
    scroll_y > threshold_px
}
