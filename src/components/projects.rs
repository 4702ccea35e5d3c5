//! Projects Section and Image Preview
//!
//! Each project card's "View" button fills the shared preview target;
//! the preview dialog renders whatever project is in it.

use dioxus::prelude::*;
use portfolio_ui::{Modal, ProjectCard};

use crate::content::PROJECTS;
use crate::context::{use_preview_target, use_reveal};

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "projects-section",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "row projects-grid",
                    for index in 0..PROJECTS.len() {
                        ProjectItem { key: "{index}", index }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectItem(index: usize) -> Element {
    let project = &PROJECTS[index];
    let id = format!("project-{}", index);
    let reveal_class = use_reveal(&id);
    let mut preview = use_preview_target();

    rsx! {
        div { id: "{id}", class: "col-md-6 col-lg-4",
            ProjectCard {
                title: project.title.to_string(),
                description: project.description.to_string(),
                image_url: project.image_url.to_string(),
                tags: project.tags.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                link: project.link.map(str::to_string),
                reveal_class: reveal_class.to_string(),
                on_view: move |target| {
                    tracing::debug!(project = %index, "Opening image preview");
                    preview.0.set(Some(target));
                },
            }
        }
    }
}

/// Dialog showing a project's image at full size.
#[component]
pub fn ImagePreviewModal() -> Element {
    let mut preview = use_preview_target();
    let current = (preview.0)();

    rsx! {
        Modal {
            id: "imageViewModal".to_string(),
            title: current.as_ref().map(|p| p.title.clone()).unwrap_or_default(),
            open: current.is_some(),
            large: true,
            on_close: move |_| preview.0.set(None),
            if let Some(target) = &current {
                img {
                    class: "project-view-image img-fluid",
                    src: target.image_url.clone(),
                    alt: target.alt().to_string(),
                }
            }
        }
    }
}
