//! Structured logging through `tracing`.
//!
//! Library code only emits `tracing` events. The host installs a
//! subscriber whose [`ConsoleLayer`] converts every event into a
//! [`LogEntry`] and hands it to a [`LogSink`]:
//!
//! ```text
//! tracing::info!(..) ──► EnvFilter ──► ConsoleLayer ──► LogSink
//!                                                       ├── browser console (web binary)
//!                                                       └── MemorySink (tests)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use portfolio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("portfolio")
//!     .with_filter("portfolio=debug,portfolio_core=info")
//!     .init(BrowserConsole)?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{ConsoleLayer, LogSink, LoggingBuilder, MemorySink};
