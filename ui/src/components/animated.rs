use leptos::IntoView;
use leptos::component;
use leptos::prelude::Children;
use leptos::prelude::ClassAttribute;
use leptos::prelude::Effect;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::StyleAttribute;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::view;

use crate::motion::Motion;

/// Renders its children at `motion.from`, then flips to `motion.to` on the
/// next frame so the CSS transition plays. Remount (new key) to replay.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let entered = RwSignal::new(false);

    Effect::new(move |_| {
        // one frame at the from-pose, otherwise the browser never interpolates
        request_animation_frame(move || entered.set(true));
    });

    view! {
        <div class=class style=move || motion.style(entered.get())>
            { children() }
        </div>
    }
}
