//! Build-time site content. Views render whatever is listed here, so editing
//! these tables never touches component logic.

use crate::components::icon::glyphs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub image: &'static str,
    /// External deploy link. `None`, empty, or `"#"` means "no real link".
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        name: "Car rental platform",
        image: "/assets/img/projects/car-rental.png",
        url: Some("https://car-rental-ochre-eight.vercel.app/"),
    },
    ProjectEntry {
        name: "Personalized Job Tracker",
        image: "/assets/img/projects/job-tracker.png",
        url: Some("https://personlized-job-tracking-i80vx8ue8-rc4990797-9203s-projects.vercel.app/"),
    },
    ProjectEntry {
        name: "ADmyBrand Landing Page",
        image: "/assets/img/projects/admybrand.png",
        // deployed without a scheme on purpose; the projects view normalizes it
        url: Some("admy-brand-seven.vercel.app"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "Web Development",
        icon: glyphs::CODE,
        description: "Modern, performant, and accessible web apps built with a \
                      strong typed stack and best practices.",
    },
    ServiceEntry {
        title: "UI/UX Design",
        icon: glyphs::PALETTE,
        description: "Clean, intuitive interfaces with a strong focus on \
                      typography, spacing, and interactions.",
    },
    ServiceEntry {
        title: "SEO Optimization",
        icon: glyphs::ROCKET,
        description: "Technical and on-page SEO to improve visibility, \
                      performance, and user engagement.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_names_are_non_empty_and_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            assert!(!a.name.is_empty());
            assert!(!a.image.is_empty());
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn service_fields_are_all_non_empty() {
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.icon.is_empty());
            assert!(!service.description.is_empty());
        }
    }
}
