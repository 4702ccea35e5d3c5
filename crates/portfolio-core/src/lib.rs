//! Portfolio Core Library
//!
//! Interaction logic for a single-page personal portfolio.
//!
//! ## Overview
//!
//! The nominal core is the contact form pipeline: per-field validation,
//! whole-form validation, submission handling with a bounded local
//! history, and the reset/focus lifecycle of the dialog that hosts the
//! form. Around it sit small, independent page effects (theme, navbar,
//! scroll spy, reveal animations, typing effect, statistics counters,
//! project cards).
//!
//! Nothing here touches the DOM. Persistence goes through the injected
//! [`KeyValueStore`] capability, timers are driven by the host, and every
//! observable change is returned as data.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Utc;
//! use portfolio_core::contact::{ContactController, FieldId, SubmitOutcome};
//! use portfolio_core::{MemoryStore, PortfolioConfig};
//!
//! let config = PortfolioConfig::default();
//! let mut contact = ContactController::from_config(MemoryStore::new(), &config);
//!
//! contact.input(FieldId::FirstName, "John");
//! contact.input(FieldId::LastName, "Doe");
//! contact.input(FieldId::Email, "john@doe.com");
//! contact.input(FieldId::Subject, "Hi");
//! contact.input(FieldId::Message, "Test");
//!
//! if let SubmitOutcome::Accepted(ticket) = contact.submit(Utc::now()) {
//!     // ...wait ticket.delay, then:
//!     contact.complete_reset(ticket);
//! }
//! ```

pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod logging;
pub mod storage;
pub mod timing;

// Re-exports
pub use config::PortfolioConfig;
pub use contact::{ContactController, ContactEvent, SubmissionRecord};
pub use error::{PortfolioError, PortfolioResult};
pub use storage::{KeyValueStore, MemoryStore, SubmissionHistory};
