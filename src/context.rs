//! Page-wide state shared through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Rc::new(config));
//! use_context_provider(ContactDialog::new);
//!
//! // In child components
//! let config = use_config();
//! let mut dialog = use_contact_dialog();
//! dialog.open();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::effects::{ImagePreview, RevealRule, RevealTracker, ThemePreference};
use portfolio_core::PortfolioConfig;

use crate::browser::{self, BrowserStore};

/// Hook to access the page configuration.
pub fn use_config() -> Rc<PortfolioConfig> {
    use_context::<Rc<PortfolioConfig>>()
}

/// Theme preference persisted in local storage.
pub type SharedTheme = Signal<ThemePreference<BrowserStore>>;

pub fn use_theme() -> SharedTheme {
    use_context::<SharedTheme>()
}

/// Open state of the contact dialog.
///
/// Any call-to-action on the page can open it; only the dialog itself
/// closes it, so its reset logic always runs.
#[derive(Clone, Copy)]
pub struct ContactDialog(Signal<bool>);

impl ContactDialog {
    pub fn new() -> Self {
        Self(Signal::new(false))
    }

    pub fn is_open(&self) -> bool {
        (self.0)()
    }

    pub fn open(&mut self) {
        self.0.set(true);
    }

    pub(crate) fn set_closed(&mut self) {
        self.0.set(false);
    }
}

pub fn use_contact_dialog() -> ContactDialog {
    use_context::<ContactDialog>()
}

/// Project whose image is being previewed, if any.
#[derive(Clone, Copy)]
pub struct PreviewTarget(pub Signal<Option<ImagePreview>>);

pub fn use_preview_target() -> PreviewTarget {
    use_context::<PreviewTarget>()
}

/// Scroll-reveal bookkeeping for the whole page.
///
/// Components register the DOM ids they want revealed; a single scroll
/// listener measures pending targets and marks them in the tracker.
#[derive(Clone)]
pub struct RevealState {
    tracker: Signal<RevealTracker>,
    targets: Rc<RefCell<Vec<String>>>,
}

impl RevealState {
    pub fn new(config: &PortfolioConfig) -> Self {
        Self {
            tracker: Signal::new(RevealTracker::new(RevealRule::fade_in(config))),
            targets: Rc::default(),
        }
    }

    fn register(&self, id: &str) {
        let mut targets = self.targets.borrow_mut();
        if !targets.iter().any(|t| t == id) {
            targets.push(id.to_string());
        }
    }

    /// Measure every unrevealed target; writes the tracker only when
    /// something new became visible.
    pub fn scan(&mut self) {
        let viewport = browser::viewport_height();
        let mut next = self.tracker.peek().clone();
        let mut changed = false;

        for id in self.targets.borrow().iter() {
            if next.is_revealed(id) {
                continue;
            }
            if let Some(rect) = browser::viewport_rect(id) {
                changed |= next.observe(id, rect, viewport);
            }
        }

        if changed {
            tracing::debug!(revealed = next.revealed_count(), "Reveal targets updated");
            self.tracker.set(next);
        }
    }
}

/// Register `id` for scroll reveal and return its current class
/// (`fade-in`, or `fade-in visible` once revealed).
pub fn use_reveal(id: &str) -> &'static str {
    let state = use_context::<RevealState>();
    let owned = id.to_string();
    use_hook({
        let state = state.clone();
        move || state.register(&owned)
    });
    let class = state.tracker.read().class(id);
    class
}

pub fn use_reveal_state() -> RevealState {
    use_context::<RevealState>()
}
