//! Browser bindings.
//!
//! Everything that touches `window`, `document` or local storage lives
//! here so the rest of the binary only deals with core types.

use anyhow::{anyhow, Context};
use gloo::utils::{document, window};
use portfolio_core::effects::{SectionBounds, Theme, ViewportRect};
use portfolio_core::logging::{LogEntry, LogSink};
use portfolio_core::{KeyValueStore, PortfolioError, PortfolioResult};
use tracing::Level;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

// ============================================================================
// Local storage
// ============================================================================

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> PortfolioResult<web_sys::Storage> {
        window()
            .local_storage()
            .map_err(|e| storage_error("open", "localStorage", e))?
            .ok_or_else(|| PortfolioError::Storage("local storage unavailable".to_string()))
    }
}

fn storage_error(op: &str, key: &str, err: JsValue) -> PortfolioError {
    PortfolioError::Storage(format!("{} '{}' failed: {:?}", op, key, err))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| storage_error("read", key, e))
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| storage_error("write", key, e))
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| storage_error("remove", key, e))
    }
}

// ============================================================================
// Console
// ============================================================================

/// [`LogSink`] writing to the browser's developer console.
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, level: Level, entry: &LogEntry) {
        let line = entry.console_line();
        match level {
            Level::ERROR => gloo::console::error!(line),
            Level::WARN => gloo::console::warn!(line),
            Level::INFO => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

// ============================================================================
// DOM measurements
// ============================================================================

/// Current vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Height of the layout viewport
pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn html_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Offset and height of each listed section that exists on the page
pub fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = html_element(id)?;
            Some(SectionBounds::new(
                *id,
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            ))
        })
        .collect()
}

/// Document offset of a section
pub fn section_top(id: &str) -> Option<f64> {
    html_element(id).map(|el| f64::from(el.offset_top()))
}

/// Bounding box of an element relative to the viewport
pub fn viewport_rect(id: &str) -> Option<ViewportRect> {
    let rect = document().get_element_by_id(id)?.get_bounding_client_rect();
    Some(ViewportRect {
        top: rect.top(),
        height: rect.height(),
    })
}

/// Smoothly scroll the window to `top`
pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Set `data-theme` on `<body>`
pub fn apply_theme(theme: Theme) -> anyhow::Result<()> {
    let body = document()
        .body()
        .ok_or_else(|| anyhow!("document has no body"))?;
    body.set_attribute("data-theme", theme.as_str())
        .map_err(|e| anyhow!("{:?}", e))
        .context("setting data-theme")
}
