//! Contact Section and Footer

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant, Icon, SvgIcon};

use crate::content::{ContactItem, CONTACT_ITEMS, OWNER_FULL_NAME};
use crate::context::{use_contact_dialog, use_reveal};

fn contact_icon(item: &ContactItem) -> Icon {
    match item.label {
        "GitHub" => Icon::Github,
        "LinkedIn" => Icon::Linkedin,
        _ => Icon::Mail,
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut dialog = use_contact_dialog();

    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "section-subtitle",
                    "Have a project in mind or just want to say hi? Send me a message."
                }
                div { class: "contact-grid",
                    for index in 0..CONTACT_ITEMS.len() {
                        ContactCard { key: "{index}", index }
                    }
                }
                div { class: "text-center",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| dialog.open(),
                        "Send a Message"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactCard(index: usize) -> Element {
    let item = &CONTACT_ITEMS[index];
    let id = format!("contact-item-{}", index);
    let reveal_class = use_reveal(&id);
    let label = item.label;
    let value = item.value;

    rsx! {
        a {
            id: "{id}",
            class: "contact-item {reveal_class}",
            href: item.href,
            target: "_blank",
            rel: "noopener noreferrer",
            SvgIcon { icon: contact_icon(item), size: 28 }
            h5 { "{label}" }
            p { "{value}" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "\u{00A9} {year} {OWNER_FULL_NAME}. All rights reserved." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_items_have_icons() {
        let icons: Vec<Icon> = CONTACT_ITEMS.iter().map(contact_icon).collect();
        assert_eq!(icons, vec![Icon::Mail, Icon::Github, Icon::Linkedin]);
    }
}
