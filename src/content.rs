//! Static page content.

/// Page sections in document order; nav links and the scroll spy use
/// these ids.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|(id, _)| *id).collect()
}

pub const OWNER_NAME: &str = "Mark";
pub const OWNER_FULL_NAME: &str = "Mark Anthony";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm an IT student who enjoys turning ideas into working software, \
     from mobile apps to responsive websites.",
    "Outside of class I build side projects, contribute to study groups \
     and keep learning new tools and frameworks.",
];

/// Statistic labels; numeric ones animate when the block scrolls in
pub const STATS: [(&str, &str); 3] = [
    ("15+", "Projects Completed"),
    ("3+", "Years Learning"),
    ("100%", "Commitment"),
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub static SKILLS: [Skill; 6] = [
    Skill { name: "HTML & CSS", level: 90 },
    Skill { name: "JavaScript", level: 80 },
    Skill { name: "Flutter", level: 75 },
    Skill { name: "Java", level: 70 },
    Skill { name: "SQL", level: 70 },
    Skill { name: "Git", level: 85 },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Campus Events App",
        description: "Mobile app for browsing and registering for campus events.",
        image_url: "assets/images/campus-events.png",
        tags: &["Flutter", "Firebase"],
        link: None,
    },
    Project {
        title: "Inventory Dashboard",
        description: "Web dashboard tracking stock levels for a small store.",
        image_url: "assets/images/inventory-dashboard.png",
        tags: &["JavaScript", "PHP", "MySQL"],
        link: None,
    },
    Project {
        title: "Personal Portfolio",
        description: "This site: theme toggle, animations and a validated contact form.",
        image_url: "assets/images/portfolio.png",
        tags: &["Rust", "Dioxus"],
        link: None,
    },
];

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_ITEMS: [ContactItem; 3] = [
    ContactItem {
        label: "Email",
        value: "mark@example.com",
        href: "mailto:mark@example.com",
    },
    ContactItem {
        label: "GitHub",
        value: "github.com/mark",
        href: "https://github.com/mark",
    },
    ContactItem {
        label: "LinkedIn",
        value: "linkedin.com/in/mark",
        href: "https://linkedin.com/in/mark",
    },
];
