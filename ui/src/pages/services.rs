use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::GlobalAttributes;
use leptos::view;

use crate::components::animated::Animated;
use crate::components::icon::Icon;
use crate::components::page_meta::PageMeta;
use crate::content::{SERVICES, ServiceEntry};
use crate::motion::PAGE_ENTER;
use crate::routes;

/// Services page: a static grid of cards, one per offered service.
#[component]
pub fn Services() -> impl IntoView {
    view! {
      <PageMeta meta=&routes::SERVICES/>

      <main class="min-h-screen p-8 md:p-12" aria-labelledby="services-heading">
        <Animated motion=PAGE_ENTER>
          <h1 id="services-heading" class="font-display text-gradient text-3xl md:text-5xl font-bold mb-10">
            "Services"
          </h1>

          <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <For
                each=|| SERVICES.iter()
                key=|service| service.title
                children=|service: &'static ServiceEntry| {
                    view! {
                      <article class="h-full bg-surface rounded-xl border p-6 shadow \
                                      transition-shadow duration-200 hover:shadow-xl">
                        <header class="flex items-center gap-3 mb-4">
                          <Icon glyph=service.icon class="w-6 h-6 text-primary"/>
                          <h2 class="text-xl font-semibold">{ service.title }</h2>
                        </header>
                        <p class="text-text/80 leading-relaxed">{ service.description }</p>
                      </article>
                    }
                }
            />
          </section>
        </Animated>
      </main>
    }
}
