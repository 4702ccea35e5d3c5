#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
mod content;
pub mod context;
mod theme;

use std::sync::OnceLock;

use anyhow::Context as _;
use portfolio_core::logging::LoggingBuilder;
use portfolio_core::PortfolioConfig;

use crate::browser::BrowserConsole;
use crate::content::OWNER_NAME;
use crate::theme::colors;

/// Page settings shipped with the site
const CONFIG_JSON: &str = include_str!("../assets/portfolio.json");

/// Global page configuration, set once at startup
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the page configuration (parsed at startup, or defaults)
pub fn page_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Store the page configuration; the first one installed wins.
fn install_config(config: PortfolioConfig) -> bool {
    let installed = CONFIG.set(config).is_ok();
    if !installed {
        tracing::warn!("Page config already set; keeping the first one");
    }
    installed
}

fn init_logging(filter: &str) -> anyhow::Result<()> {
    LoggingBuilder::new("portfolio")
        .with_filter(filter)
        .init(BrowserConsole)
        .with_context(|| format!("installing log subscriber with filter '{}'", filter))
}

fn main() {
    let parsed = PortfolioConfig::from_json(CONFIG_JSON);
    let config = parsed.as_ref().cloned().unwrap_or_default();

    if let Err(e) = init_logging(&config.log_filter) {
        gloo::console::warn!(format!("{:#}", e));
        if let Err(e) = init_logging("info") {
            gloo::console::error!(format!("Logging disabled: {:#}", e));
        }
    }

    if let Err(e) = &parsed {
        tracing::warn!("Bundled config rejected, using defaults: {}", e);
    }

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {}", info);
    }));

    gloo::console::log!(
        format!("%c Hi, I'm {}! ", OWNER_NAME),
        format!(
            "background: {}; color: {}; font-size: 16px; padding: 4px 8px; border-radius: 4px;",
            colors::ACCENT,
            colors::TEXT_ON_ACCENT
        )
    );

    tracing::info!(
        history_capacity = config.history_capacity,
        reset_ms = config.success_reset_ms,
        "Starting portfolio"
    );

    install_config(config);

    dioxus::launch(app::App);
}
