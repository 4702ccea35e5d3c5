//! Skills Section

use dioxus::prelude::*;

use crate::content::SKILLS;
use crate::context::use_reveal;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "skills-section",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (index, skill) in SKILLS.iter().enumerate() {
                        SkillItem { key: "{index}", index, name: skill.name, level: skill.level }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillItem(index: usize, name: &'static str, level: u8) -> Element {
    let id = format!("skill-{}", index);
    let reveal_class = use_reveal(&id);

    rsx! {
        div { id: "{id}", class: "skill-item {reveal_class}",
            div { class: "skill-header",
                span { class: "skill-name", "{name}" }
                span { class: "skill-level", "{level}%" }
            }
            div { class: "progress",
                div {
                    class: "progress-bar",
                    role: "progressbar",
                    style: "width: {level}%",
                    "aria-valuenow": "{level}",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                }
            }
        }
    }
}
