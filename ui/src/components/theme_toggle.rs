use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::view;

use crate::components::icon::{Icon, glyphs};
use crate::theme::{ThemeCell, ThemePreference};

/// Floating light/dark switch. The glyph hints at the *current* mode.
#[component]
pub fn ThemeToggle(theme: ThemeCell) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            title="Toggle light/dark"
            class="flex items-center gap-2 px-3 py-2 rounded-full border border-text/20 \
                   bg-surface/85 text-text backdrop-blur shadow hover:brightness-110 transition"
            on:click=move |_| theme.toggle()
        >
            { move || {
                let glyph = match theme.get() {
                    ThemePreference::Dark => glyphs::SUN,
                    ThemePreference::Light => glyphs::MOON,
                };
                view! { <Icon glyph=glyph class="w-4 h-4"/> }
            }}
            <span class="hidden sm:inline text-sm">"Theme"</span>
        </button>
    }
}
