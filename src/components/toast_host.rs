//! Toast Host Component
//!
//! Renders the active toasts; clicking one dismisses it.

use leptos::prelude::*;

use crate::toast::{dismiss, ToastEntry};

#[component]
pub fn ToastHost(
    toasts: ReadSignal<Vec<ToastEntry>>,
    set_toasts: WriteSignal<Vec<ToastEntry>>,
) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = format!("toast {}", entry.toast.severity.as_str());
                    view! {
                        <div class=class on:click=move |_| dismiss(set_toasts, id)>
                            <strong class="toast-title">{entry.toast.title}</strong>
                            <p class="toast-message">{entry.toast.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
