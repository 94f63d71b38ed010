use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::components::animated::Animated;
use crate::components::page_meta::PageMeta;
use crate::motion::PAGE_ENTER;
use crate::routes;

/// Catch-all for unmatched paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <PageMeta meta=&routes::NOT_FOUND/>

      <main class="min-h-screen grid place-items-center p-8">
        <Animated motion=PAGE_ENTER class="text-center">
          <h1 class="font-display text-gradient text-6xl font-bold mb-4">"404"</h1>
          <p class="text-text/80 mb-8">"The page you were looking for does not exist."</p>
          <a
              href="/"
              class="px-6 py-3 rounded-full bg-primary text-neutral-dark font-medium \
                     transition-transform duration-200 hover:scale-105"
          >
            "Go Home"
          </a>
        </Animated>
      </main>
    }
}
