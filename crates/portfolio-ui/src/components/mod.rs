//! Reusable UI components
//!
//! All components take their state as props and report user actions via
//! `EventHandler`s, so the page owns every controller.

mod alert;
mod button;
mod icons;
mod input;
mod modal;
mod project_card;
mod theme_toggle;

pub use alert::*;
pub use button::*;
pub use icons::*;
pub use input::*;
pub use modal::*;
pub use project_card::*;
pub use theme_toggle::*;
