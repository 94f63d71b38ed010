use leptos::IntoView;
use leptos::component;
use leptos::ev::SubmitEvent;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::OnTargetAttribute;
use leptos::prelude::PropAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::view;

use crate::components::animated::Animated;
use crate::components::icon::{Icon, glyphs};
use crate::components::page_meta::PageMeta;
use crate::motion::{PAGE_ENTER, PAGE_ENTER_DELAYED};
use crate::routes;
use crate::toast::Toaster;

/// Text for the submission toast. Falls back to "friend" should an empty
/// name ever get past the widget-level `required` check.
pub fn success_message(name: &str) -> String {
    let name = name.trim();
    let who = if name.is_empty() { "friend" } else { name };
    format!("Thanks, {who}! I'll get back to you soon.")
}

/// Contact page: details on the left, a simulated-submission form on the
/// right. Submitting never leaves the page; it only raises a toast and
/// clears the fields.
#[component]
pub fn Contact(toaster: Toaster) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        toaster.success(success_message(&name.get_untracked()));
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    view! {
      <PageMeta meta=&routes::CONTACT/>

      <main class="min-h-screen flex flex-col md:flex-row" aria-labelledby="contact-heading">
        <Animated
            motion=PAGE_ENTER
            class="flex-1 p-8 md:p-12 space-y-6 border-b md:border-b-0 md:border-r"
        >
          <h1 id="contact-heading" class="font-display text-gradient text-3xl md:text-5xl font-bold">
            "Contact"
          </h1>
          <ul class="space-y-4">
            <li class="flex items-center gap-3">
              <Icon glyph=glyphs::MAIL class="w-5 h-5"/>
              <a href="mailto:you@example.com" class="hover:underline">"you@example.com"</a>
            </li>
            <li class="flex items-center gap-3">
              <Icon glyph=glyphs::PHONE class="w-5 h-5"/>
              <a href="tel:+1234567890" class="hover:underline">"+1 (234) 567-890"</a>
            </li>
            <li class="flex items-center gap-3">
              <Icon glyph=glyphs::MAP_PIN class="w-5 h-5"/>
              <span>"City, Country"</span>
            </li>
          </ul>
          <div class="flex items-center gap-4 pt-2">
            <a
                href="https://github.com/"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub"
                class="hover:scale-105 transition-transform"
            >
              <Icon glyph=glyphs::GITHUB class="w-6 h-6"/>
            </a>
            <a
                href="https://www.linkedin.com/"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn"
                class="hover:scale-105 transition-transform"
            >
              <Icon glyph=glyphs::LINKEDIN class="w-6 h-6"/>
            </a>
          </div>
        </Animated>

        <Animated
            motion=PAGE_ENTER_DELAYED
            class="flex-1 p-8 md:p-12"
        >
          <form on:submit=on_submit class="max-w-xl space-y-4" aria-label="Contact form">
            <div class="grid gap-2">
              <label for="name" class="font-medium">"Name"</label>
              <input
                  id="name"
                  type="text"
                  placeholder="Your full name"
                  required
                  prop:value=move || name.get()
                  on:input:target=move |ev| name.set(ev.target().value())
                  class="rounded-lg border bg-surface px-3 py-2"
              />
            </div>

            <div class="grid gap-2">
              <label for="email" class="font-medium">"Email"</label>
              <input
                  id="email"
                  type="email"
                  placeholder="you@example.com"
                  required
                  prop:value=move || email.get()
                  on:input:target=move |ev| email.set(ev.target().value())
                  class="rounded-lg border bg-surface px-3 py-2"
              />
            </div>

            <div class="grid gap-2">
              <label for="message" class="font-medium">"Message"</label>
              <textarea
                  id="message"
                  placeholder="How can I help?"
                  rows="6"
                  required
                  prop:value=move || message.get()
                  on:input:target=move |ev| message.set(ev.target().value())
                  class="rounded-lg border bg-surface px-3 py-2"
              ></textarea>
            </div>

            <button
                type="submit"
                class="px-6 py-3 rounded-full bg-primary text-neutral-dark font-medium \
                       transition-transform duration-200 hover:scale-105"
            >
              "Send Message"
            </button>
          </form>
        </Animated>
      </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Severity;

    #[test]
    fn toast_text_interpolates_the_sender_name() {
        assert_eq!(success_message("Ana"), "Thanks, Ana! I'll get back to you soon.");
    }

    #[test]
    fn blank_names_fall_back_to_friend() {
        assert_eq!(success_message(""), "Thanks, friend! I'll get back to you soon.");
        assert_eq!(success_message("   "), "Thanks, friend! I'll get back to you soon.");
    }

    #[test]
    fn submission_raises_exactly_one_success_toast() {
        let toaster = Toaster::new();
        toaster.success(success_message("Ana"));

        let toasts = toaster.current();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
        assert!(toasts[0].message.contains("Ana"));
    }
}
