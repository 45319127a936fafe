//! Toast notifications
//!
//! A page-wide toast queue provided through context. Components look it up
//! with [`use_toast_context`] and carry on silently when none is provided.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::core::Toast;
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::run_after;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// Length of the exit transition
const EXIT_ANIMATION_MS: u32 = 300;

/// Toast with unique ID for tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Handle to the toast queue
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the toasts signal for the container
    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    /// Queue a toast, dropping the oldest past the limit
    pub fn show(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push_back(ToastItem { id, toast });

            while t.len() > MAX_TOASTS {
                t.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.retain(|item| item.id != id));
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the toast queue to the component tree
pub fn provide_toast_context() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

/// Toast queue, if one has been provided
pub fn use_toast_context() -> Option<ToastManager> {
    use_context::<ToastManager>()
}

/// Fixed-position stack rendering the queued toasts
#[component]
pub fn ToastContainer(manager: ToastManager) -> impl IntoView {
    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-3 w-full max-w-sm">
            <For
                each=move || manager.toasts().get()
                key=|item| item.id
                children=move |item| view! { <ToastCard item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(item: ToastItem, manager: ToastManager) -> impl IntoView {
    let (is_exiting, set_is_exiting) = signal(false);
    let id = item.id;

    let close = move || {
        set_is_exiting.set(true);
        run_after(EXIT_ANIMATION_MS, move || manager.dismiss(id));
    };

    if let Some(duration) = item.toast.duration_ms {
        run_after(duration, move || {
            // The card may already be gone if it was closed by hand
            if set_is_exiting.try_set(true).is_none() {
                run_after(EXIT_ANIMATION_MS, move || manager.dismiss(id));
            }
        });
    }

    let (accent_class, icon_class) = item.toast.kind.classes();
    let container_class = format!(
        "glass glass-hover border-l-4 shadow-prominent rounded-xl p-4 flex items-start gap-3 transition-all duration-300 {}",
        accent_class
    );

    view! {
        <div
            class=container_class
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <Icon name=item.toast.kind.icon() class=format!("w-5 h-5 flex-shrink-0 {}", icon_class) />
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-heading font-semibold text-foreground">{item.toast.title.clone()}</h4>
                <p class="text-xs text-muted-foreground font-caption mt-0.5">{item.toast.message.clone()}</p>
            </div>
            <button
                class="text-muted-foreground hover:text-foreground transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| close()
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest_toasts() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            for n in 0..7 {
                manager.show(Toast::success(format!("Toast {}", n), "queued"));
            }

            let ids: Vec<u64> = manager
                .toasts()
                .with_untracked(|t| t.iter().map(|item| item.id).collect());
            assert_eq!(ids, vec![2, 3, 4, 5, 6]);
        });
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            manager.show(Toast::success("First", "one"));
            manager.show(Toast::success("Second", "two"));

            manager.dismiss(0);
            manager.dismiss(42);

            let titles: Vec<String> = manager
                .toasts()
                .with_untracked(|t| t.iter().map(|item| item.toast.title.clone()).collect());
            assert_eq!(titles, vec!["Second".to_string()]);
        });
    }
}
