//! Fire-and-forget notifications, rendered by a single host mounted in the
//! shell so they outlive route changes.

use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Update;
use leptos::view;

#[cfg(target_arch = "wasm32")]
const DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "border-l-4 border-green-500",
            Severity::Error => "border-l-4 border-red-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// Handle for pushing notifications. Copy, so views take it as a plain prop.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn push(self, severity: Severity, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                severity,
                message: message.into(),
            });
        });

        #[cfg(target_arch = "wasm32")]
        gloo_timers::callback::Timeout::new(DISMISS_MS, move || self.dismiss(id)).forget();
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn current(self) -> Vec<Toast> {
        self.toasts.get_untracked()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" role="status">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    view! {
                        <div class=format!(
                            "bg-surface text-text rounded-lg shadow-lg px-4 py-3 {}",
                            toast.severity.class(),
                        )>
                            { toast.message.clone() }
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_queues_a_toast() {
        let toaster = Toaster::new();
        toaster.success("Thanks, Ana!");

        let toasts = toaster.current();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
        assert!(toasts[0].message.contains("Ana"));
    }

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        let toaster = Toaster::new();
        toaster.push(Severity::Success, "first");
        toaster.push(Severity::Error, "second");

        let first_id = toaster.current()[0].id;
        toaster.dismiss(first_id);

        let remaining = toaster.current();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "second");
    }

    #[test]
    fn ids_are_unique_across_pushes() {
        let toaster = Toaster::new();
        toaster.push(Severity::Success, "a");
        toaster.push(Severity::Success, "b");

        let toasts = toaster.current();
        assert_ne!(toasts[0].id, toasts[1].id);
    }
}
