//! Small page widgets: the scroll-to-top button and the burger menu.

/// Scroll distance after which the scroll-to-top button appears
pub const SCROLL_UP_OFFSET: f64 = 300.0;

/// Visibility rule of the scroll-to-top button
///
/// The button only exists on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUp {
    pub offset: f64,
    pub max_width: f64,
}

impl Default for ScrollUp {
    fn default() -> Self {
        Self {
            offset: SCROLL_UP_OFFSET,
            max_width: 768.0,
        }
    }
}

impl ScrollUp {
    pub fn is_visible(&self, scroll_top: f64, viewport_width: f64) -> bool {
        viewport_width <= self.max_width && scroll_top >= self.offset
    }
}

/// Where a click inside the open menu landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    Burger,
    Close,
    Link,
    Elsewhere,
}

/// Open/closed state of the mobile burger menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply a click and return the new open state
    pub fn click(&mut self, target: MenuClick) -> bool {
        match target {
            MenuClick::Burger => self.open = true,
            MenuClick::Close | MenuClick::Link => self.open = false,
            MenuClick::Elsewhere => {}
        }
        self.open
    }
}
