//! Project Card Component
//!
//! Card for one portfolio project: image, title, description, tech tags
//! and a button opening the image preview. Lifts slightly on hover.

use dioxus::prelude::*;
use portfolio_core::effects::{card_transform, ImagePreview};

use super::button::{button_class, ButtonVariant};
use super::icons::{Icon, SvgIcon};

/// Properties for the ProjectCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Technology tags
    #[props(default)]
    pub tags: Vec<String>,
    /// Optional link to the source or live site
    #[props(default)]
    pub link: Option<String>,
    /// Reveal class from the scroll tracker
    #[props(default)]
    pub reveal_class: String,
    /// Open the image preview for this project
    pub on_view: EventHandler<ImagePreview>,
}

/// Project card with hover lift
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         title: project.title.to_string(),
///         description: project.description.to_string(),
///         image_url: project.image_url.to_string(),
///         on_view: move |preview| preview_target.set(Some(preview)),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut hovered = use_signal(|| false);
    let transform = card_transform(hovered());
    let preview = ImagePreview::new(props.title.clone(), props.image_url.clone());
    let on_view = props.on_view;
    let view_class = button_class(ButtonVariant::Outline, true);
    let link_class = button_class(ButtonVariant::Link, true);

    rsx! {
        div {
            class: "card project-card h-100 {props.reveal_class}",
            style: "transform: {transform}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            img {
                class: "card-img-top",
                src: "{props.image_url}",
                alt: "{props.title}",
                loading: "lazy",
            }
            div { class: "card-body",
                h5 { class: "card-title", "{props.title}" }
                p { class: "card-text", "{props.description}" }
                div { class: "project-tags",
                    for tag in props.tags.iter() {
                        span { class: "badge", "{tag}" }
                    }
                }
            }
            div { class: "card-footer",
                button {
                    class: "{view_class}",
                    r#type: "button",
                    "data-title": "{props.title}",
                    "data-image": "{props.image_url}",
                    onclick: move |_| on_view.call(preview.clone()),
                    SvgIcon { icon: Icon::Eye, size: 16 }
                    " View"
                }
                if let Some(link) = &props.link {
                    a {
                        class: "{link_class}",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        SvgIcon { icon: Icon::ExternalLink, size: 16 }
                        " Source"
                    }
                }
            }
        }
    }
}
