use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    contact::Contact, home::Home, not_found::NotFound, projects::Projects, services::Services,
};
use crate::toast::Toaster;

/// Head metadata for one routed page.
pub struct RouteMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME: RouteMeta = RouteMeta {
    path: "/",
    title: "Frontend Developer Portfolio",
    description: "Frontend developer crafting interactive web experiences. \
                  Explore projects, services, and contact details.",
};

pub const PROJECTS: RouteMeta = RouteMeta {
    path: "/projects",
    title: "Projects | Frontend Developer Portfolio",
    description: "Explore projects including development dashboards, UI kits, \
                  and SEO insights with dynamic previews.",
};

pub const SERVICES: RouteMeta = RouteMeta {
    path: "/services",
    title: "Services | Frontend Developer Portfolio",
    description: "Web development, UI/UX design, and SEO optimization services \
                  with responsive design and performance focus.",
};

pub const CONTACT: RouteMeta = RouteMeta {
    path: "/contact",
    title: "Contact | Frontend Developer Portfolio",
    description: "Get in touch via email, phone, or social links. Send a \
                  message using the contact form.",
};

pub const NOT_FOUND: RouteMeta = RouteMeta {
    path: "/404",
    title: "Page Not Found | Frontend Developer Portfolio",
    description: "The page you were looking for does not exist.",
};

#[component]
pub fn RoutesMenu(toaster: Toaster) -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")          view=Home     />
        <Route path=path!("/projects") view=Projects />
        <Route path=path!("/services") view=Services />
        <Route path=path!("/contact")  view=move || view! { <Contact toaster/> } />
      </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&RouteMeta] = &[&HOME, &PROJECTS, &SERVICES, &CONTACT, &NOT_FOUND];

    #[test]
    fn routed_paths_match_the_documented_set() {
        assert_eq!(HOME.path, "/");
        assert_eq!(PROJECTS.path, "/projects");
        assert_eq!(SERVICES.path, "/services");
        assert_eq!(CONTACT.path, "/contact");
    }

    #[test]
    fn titles_are_pairwise_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn every_route_carries_a_description() {
        for meta in ALL {
            assert!(!meta.description.is_empty());
        }
    }
}
