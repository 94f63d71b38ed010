use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_meta::Link;
use leptos_meta::Meta;
use leptos_meta::Title;

use crate::routes::RouteMeta;

/// Per-page head tags: title, description, and a canonical address derived
/// from the current origin plus the route path.
#[component]
pub fn PageMeta(meta: &'static RouteMeta) -> impl IntoView {
    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        { canonical_url(meta.path).map(|href| view! { <Link rel="canonical" href=href/> }) }
    }
}

fn canonical_url(path: &str) -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}{path}"))
}
