use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::Effect;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::theme_toggle::ThemeToggle;
use crate::routes::RoutesMenu;
use crate::theme::ThemeCell;
use crate::toast::{ToastHost, Toaster};

/// Shell: owns the theme cell and the toaster, mounts the router, and keeps
/// the floating theme toggle and toast host outside the route switch so they
/// survive navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeCell::load();
    let toaster = Toaster::new();

    // one mode flag on the document root restyles every surface at once
    Effect::new(move |_| {
        apply_document_theme(theme.get().as_str());
    });

    view! {
      <Router>
        <ToastHost toaster/>

        <div class="fixed bottom-4 right-4 z-50">
          <ThemeToggle theme/>
        </div>

        <RoutesMenu toaster/>
      </Router>
    }
}

fn apply_document_theme(mode: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", mode);
    }
}
