//! Navbar scroll behavior, scroll spy and anchor-link targets.

use crate::config::PortfolioConfig;

/// Navbar background, constant regardless of scroll depth
pub const NAVBAR_BACKGROUND: &str = "#00356B";
/// Shadow applied once the page is scrolled past the shadow threshold
pub const NAVBAR_SHADOW: &str = "0 2px 20px rgba(0, 53, 107, 0.3)";

/// How the navbar should be drawn for the current scroll position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavbarStyle {
    /// Page scrolled far enough to show the shadow
    pub elevated: bool,
    /// Navbar translated out of view
    pub hidden: bool,
}

impl NavbarStyle {
    pub fn box_shadow(&self) -> &'static str {
        if self.elevated {
            NAVBAR_SHADOW
        } else {
            "none"
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }

    /// Inline style string for the navbar element
    pub fn inline_style(&self) -> String {
        format!(
            "background: {}; box-shadow: {}; transform: {};",
            NAVBAR_BACKGROUND,
            self.box_shadow(),
            self.transform()
        )
    }
}

/// Tracks scroll direction to decide the navbar style.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarScroll {
    shadow_after: f64,
    hide_after: f64,
    last_scroll_top: f64,
}

impl NavbarScroll {
    pub fn new(shadow_after: f64, hide_after: f64) -> Self {
        Self {
            shadow_after,
            hide_after,
            last_scroll_top: 0.0,
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self::new(config.navbar_shadow_after, config.navbar_hide_after)
    }

    /// Feed the new scroll position.
    ///
    /// Scrolling down past `hide_after` hides the bar; any upward scroll
    /// (or being above the threshold) shows it again.
    pub fn on_scroll(&mut self, scroll_top: f64) -> NavbarStyle {
        let style = NavbarStyle {
            elevated: scroll_top > self.shadow_after,
            hidden: scroll_top > self.last_scroll_top && scroll_top > self.hide_after,
        };
        self.last_scroll_top = scroll_top;
        style
    }
}

/// Measured position of a page section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }
}

/// Section whose nav link should be active at `scroll_y`.
///
/// Each section covers `[top - offset, top - offset + height)`. When
/// windows overlap the last section in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.offset_top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Section id referenced by an in-page anchor (`#about` -> `about`).
///
/// Returns `None` for external links and a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed navbar
pub fn scroll_target(section_offset_top: f64, nav_offset: f64) -> f64 {
    section_offset_top - nav_offset
}
