//! Type Selector Component
//!
//! Payment type selector buttons.

use leptos::prelude::*;
use payments_core::PaymentType;

/// One button per payment type; the active one is highlighted
#[component]
pub fn TypeSelector(
    current_type: Signal<Option<PaymentType>>,
    on_change: impl Fn(PaymentType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {PaymentType::ALL.into_iter().map(|payment_type| {
                let is_selected = move || current_type.get() == Some(payment_type);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(payment_type)
                    >
                        {payment_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
