//! Page sections for the portfolio.

mod about;
mod contact_modal;
mod contact_section;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact_modal::ContactModal;
pub use contact_section::{ContactSection, Footer};
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::{ImagePreviewModal, Projects};
pub use skills::Skills;
