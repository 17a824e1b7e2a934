//! Open/closed state of the collapsible admin navigation panel.
//!
//! On narrow viewports the panel is hidden behind the hamburger button; on
//! wide ones it is always shown inline and the open flag must be `false`.
//!
//! ```text
//!           toggle (narrow)
//!   Closed ◀──────────────▶ Open
//!      ▲                      │
//!      └── width ≥ breakpoint ┘
//! ```

use content::NavConfig;

/// State machine behind the hamburger button.
#[derive(Clone, Debug, PartialEq)]
pub struct NavController {
    open: bool,
    /// Last width reported by the viewport provider.
    width: Option<u32>,
    breakpoint: u32,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(NavConfig::default().breakpoint)
    }
}

impl NavController {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            open: false,
            width: None,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// True once a width at or above the breakpoint has been observed.
    pub fn is_wide(&self) -> bool {
        self.width.is_some_and(|w| w >= self.breakpoint)
    }

    /// Flip the panel. Ignored on wide viewports, where the panel is inline.
    pub fn toggle(&mut self) -> bool {
        if !self.is_wide() {
            self.open = !self.open;
        }
        self.open
    }

    /// Close the panel, e.g. after a nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Feed a width notification. Returns `true` if the panel was force-closed.
    ///
    /// Repeating the last width is a no-op.
    pub fn observe_width(&mut self, width: u32) -> bool {
        if self.width == Some(width) {
            return false;
        }
        self.width = Some(width);
        if width >= self.breakpoint && self.open {
            self.open = false;
            return true;
        }
        false
    }
}
