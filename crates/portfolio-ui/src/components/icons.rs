//! Inline SVG icons (Lucide outlines).

use dioxus::prelude::*;

/// Icons used on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Sun,
    Moon,
    Github,
    Linkedin,
    Mail,
    Eye,
    ExternalLink,
    Menu,
    ChevronDown,
}

impl Icon {
    /// Accessible name
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Sun => "Light theme",
            Icon::Moon => "Dark theme",
            Icon::Github => "GitHub",
            Icon::Linkedin => "LinkedIn",
            Icon::Mail => "Email",
            Icon::Eye => "View",
            Icon::ExternalLink => "Open",
            Icon::Menu => "Menu",
            Icon::ChevronDown => "Scroll down",
        }
    }
}

/// Properties for the SvgIcon component
#[derive(Clone, PartialEq, Props)]
pub struct SvgIconProps {
    pub icon: Icon,
    #[props(default = 20)]
    pub size: u32,
}

#[component]
pub fn SvgIcon(props: SvgIconProps) -> Element {
    let size = props.size;

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": props.icon.label(),
            {icon_body(props.icon)}
        }
    }
}

fn icon_body(icon: Icon) -> Element {
    match icon {
        Icon::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        },
        Icon::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        Icon::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        Icon::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        Icon::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        Icon::Eye => rsx! {
            path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
        Icon::ExternalLink => rsx! {
            path { d: "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
        Icon::Menu => rsx! {
            path { d: "M4 6h16M4 12h16M4 18h16" }
        },
        Icon::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
    }
}
