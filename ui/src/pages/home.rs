use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::GlobalAttributes;
use leptos::view;

use crate::components::animated::Animated;
use crate::components::page_meta::PageMeta;
use crate::motion::{PAGE_ENTER, PAGE_ENTER_DELAYED};
use crate::routes;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/projects", "Projects"),
    ("/services", "Services"),
    ("/contact", "Contact Me"),
];

/// Landing page: bottom-left hero, big centered navigation on the right.
#[component]
pub fn Home() -> impl IntoView {
    view! {
      <PageMeta meta=&routes::HOME/>

      <main class="min-h-screen flex flex-col md:flex-row">
        <Animated
            motion=PAGE_ENTER
            class="flex-1 p-8 md:p-12 flex flex-col items-start justify-end"
        >
          <h1 id="intro-heading" class="font-display text-gradient text-4xl md:text-6xl font-bold leading-tight">
            <span class="block">"Frontend Developer"</span>
            <span class="block text-3xl md:text-5xl mt-2">"Your Name"</span>
          </h1>
          <p class="text-gradient text-lg md:text-2xl mt-3">
            "I turn ideas into interactive, user-friendly, and visually appealing \
             web experiences, with a focus on responsive design, smooth \
             animations, and performance."
          </p>
        </Animated>

        <Animated
            motion=PAGE_ENTER_DELAYED
            class="flex-1 grid place-items-center overflow-hidden p-8 md:p-12"
        >
          <ul class="flex flex-col items-center gap-8 w-full max-w-md">
            <For
                each=|| NAV_LINKS.iter().copied()
                key=|(path, _)| *path
                children=|(path, label)| {
                    view! {
                      <li class="w-full">
                        <a
                            href=path
                            class="block text-center text-gradient text-3xl md:text-5xl py-4 \
                                   transition-transform duration-200 hover:scale-105"
                        >
                          { label }
                        </a>
                      </li>
                    }
                }
            />
          </ul>
        </Animated>
      </main>
    }
}
