use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::view;

use crate::components::animated::Animated;
use crate::components::page_meta::PageMeta;
use crate::content::{PROJECTS, ProjectEntry};
use crate::motion::{PAGE_ENTER, PAGE_ENTER_DELAYED, PREVIEW_ENTER};
use crate::routes;

/// Resolves a project's deploy link to an openable address.
///
/// `None`, the empty string, and the `"#"` placeholder mean "no real link";
/// a scheme-less address gets `https://` prepended; anything already carrying
/// `http(s)://` passes through unchanged.
pub fn link_target(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    if url.is_empty() || url == "#" {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_owned())
    } else {
        Some(format!("https://{url}"))
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        // new unrelated browsing context, no opener handle back to us
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_tab(_url: &str) {}

/// Selection transition: `Some(next)` when the active index actually moves,
/// `None` when re-selecting the current entry. Signals notify on every write,
/// so a `None` here is what keeps the preview from replaying its transition.
pub fn next_active(current: usize, requested: usize) -> Option<usize> {
    (current != requested).then_some(requested)
}

/// Projects page: list on the left, live preview of the active entry on the
/// right. Hover or focus selects; click opens the deploy link when there is
/// one.
#[component]
pub fn Projects() -> impl IntoView {
    let active = RwSignal::new(0usize);

    // equal index is a no-op so re-hovering never replays the preview enter
    let select = move |i: usize| {
        if let Some(next) = next_active(active.get_untracked(), i) {
            active.set(next);
        }
    };

    let activate = move |entry: &ProjectEntry| {
        if let Some(target) = link_target(entry.url) {
            open_in_new_tab(&target);
        }
    };

    view! {
      <PageMeta meta=&routes::PROJECTS/>

      <main class="min-h-screen flex flex-col md:flex-row" aria-labelledby="projects-heading">
        <Animated
            motion=PAGE_ENTER
            class="flex-1 p-8 md:p-12 border-b md:border-b-0 md:h-screen flex flex-col"
        >
          <h1 id="projects-heading" class="font-display text-gradient text-3xl md:text-5xl font-bold mb-8">
            "Projects"
          </h1>

          <ul class="space-y-6 flex-1 overflow-y-auto pr-2">
            <For
                each=|| PROJECTS.iter().enumerate()
                key=|(_, entry)| entry.name
                children=move |(i, entry): (usize, &'static ProjectEntry)| {
                    let clickable = link_target(entry.url).is_some();
                    view! {
                      <li class="flex items-center justify-between">
                        <button
                            type="button"
                            on:mouseenter=move |_| select(i)
                            on:focus=move |_| select(i)
                            on:click=move |_| activate(entry)
                            class=format!(
                                "text-left text-2xl md:text-3xl text-gradient \
                                 transition-transform duration-200 hover:scale-105 {}",
                                if clickable { "cursor-pointer" } else { "cursor-default" },
                            )
                            aria-controls="project-preview"
                            aria-label=format!("Preview {}", entry.name)
                        >
                          { entry.name }
                        </button>
                      </li>
                    }
                }
            />
          </ul>
        </Animated>

        <Animated
            motion=PAGE_ENTER_DELAYED
            class="flex-1 grid place-items-center p-8 md:p-12 md:h-screen"
        >
          <section id="project-preview" aria-label="Project preview" class="w-full max-w-4xl">
            // keyed on the active index: a different index remounts and
            // replays the enter transition, the same index leaves it alone
            { move || {
                let entry = &PROJECTS[active.get()];
                view! {
                  <Animated
                      motion=PREVIEW_ENTER
                      class="w-full aspect-video overflow-hidden rounded-lg border shadow-lg"
                  >
                    <img
                        src=entry.image
                        alt=format!("{} preview image", entry.name)
                        loading="lazy"
                        class="w-full h-full object-cover"
                    />
                  </Animated>
                }
            }}
          </section>
        </Animated>
      </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_missing_links_resolve_to_nothing() {
        assert_eq!(link_target(None), None);
        assert_eq!(link_target(Some("")), None);
        assert_eq!(link_target(Some("   ")), None);
        assert_eq!(link_target(Some("#")), None);
    }

    #[test]
    fn scheme_less_links_get_a_secure_scheme() {
        assert_eq!(
            link_target(Some("example.com")),
            Some("https://example.com".to_owned()),
        );
        assert_eq!(
            link_target(Some("admy-brand-seven.vercel.app")),
            Some("https://admy-brand-seven.vercel.app".to_owned()),
        );
    }

    #[test]
    fn absolute_links_pass_through_unchanged() {
        assert_eq!(
            link_target(Some("https://example.com")),
            Some("https://example.com".to_owned()),
        );
        assert_eq!(
            link_target(Some("http://example.com")),
            Some("http://example.com".to_owned()),
        );
    }

    #[test]
    fn reselecting_the_active_entry_changes_nothing() {
        assert_eq!(next_active(0, 0), None);
        assert_eq!(next_active(2, 2), None);
    }

    #[test]
    fn selecting_a_different_entry_moves_the_active_index() {
        assert_eq!(next_active(0, 2), Some(2));
        assert_eq!(next_active(2, 0), Some(0));
    }

    #[test]
    fn every_bundled_project_with_a_link_is_openable() {
        for entry in PROJECTS {
            if let Some(target) = link_target(entry.url) {
                assert!(target.starts_with("http"));
            }
        }
    }
}
