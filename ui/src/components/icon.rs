use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

/// 24x24 stroke path data, one glyph per constant.
pub mod glyphs {
    pub const SUN: &str = "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z M12 2v2 M12 20v2 \
        M4.93 4.93l1.41 1.41 M17.66 17.66l1.41 1.41 M2 12h2 M20 12h2 \
        M4.93 19.07l1.41-1.41 M17.66 6.34l1.41-1.41";
    pub const MOON: &str = "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z";
    pub const CODE: &str = "m16 18 6-6-6-6 M8 6l-6 6 6 6";
    pub const PALETTE: &str = "M12 22a10 10 0 1 1 10-10c0 1.66-1.34 3-3 3h-2.5a2.5 \
        2.5 0 0 0 0 5H12z M7.5 11a1 1 0 1 0 0-2 1 1 0 0 0 0 2z \
        M12 8a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M16.5 11a1 1 0 1 0 0-2 1 1 0 0 0 0 2z";
    pub const ROCKET: &str = "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 \
        2.18 0 0 0-2.91-.09z M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 \
        2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z";
    pub const MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 \
        2 0 0 1 2-2z m18 2-10 7L2 6";
    pub const PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 \
        19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.08 4.18 2 2 0 0 1 4.06 2h3a2 2 0 0 1 2 \
        1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 \
        2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z";
    pub const MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z \
        M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z";
    pub const GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
        0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 \
        5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4 \
        M9 18c-4.51 2-5-2-7-2";
    pub const LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 \
        2v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z";
}

#[component]
pub fn Icon(glyph: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=glyph/>
        </svg>
    }
}
