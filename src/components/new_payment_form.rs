//! New Payment Form Component
//!
//! Type, amount, due date and notes for a payment on the selected account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payments_core::{FormField, PaymentType};

use crate::components::TypeSelector;
use crate::context::use_panel;

#[component]
pub fn NewPaymentForm() -> impl IntoView {
    let ctx = use_panel();

    // Raw input text; the panel holds the parsed values
    let (amount, set_amount) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let current_type = Signal::derive(move || ctx.read(|panel| panel.form().payment_type));
    let on_type_change = move |payment_type: PaymentType| {
        ctx.panel()
            .on_field_changed(FormField::PaymentType.name(), payment_type.as_str());
    };

    let bind = move |field: FormField, set: WriteSignal<String>| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            ctx.panel().on_field_changed(field.name(), &value);
            set.set(value);
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let panel = ctx.panel();
        spawn_local(async move {
            if panel.submit().await.is_ok() {
                set_amount.set(String::new());
                set_due_date.set(String::new());
                set_notes.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-payment-form" on:submit=submit>
            <h2>"New Payment"</h2>
            <label>
                "Payment Type"
                <TypeSelector current_type=current_type on_change=on_type_change />
            </label>
            <label>
                "Amount"
                <input
                    type="number"
                    step="0.01"
                    name=FormField::Amount.name()
                    prop:value=move || amount.get()
                    on:input=bind(FormField::Amount, set_amount)
                />
            </label>
            <label>
                "Due Date"
                <input
                    type="date"
                    name=FormField::DueDate.name()
                    prop:value=move || due_date.get()
                    on:input=bind(FormField::DueDate, set_due_date)
                />
            </label>
            <label>
                "Notes"
                <textarea
                    name=FormField::Notes.name()
                    prop:value=move || notes.get()
                    on:input=bind(FormField::Notes, set_notes)
                />
            </label>
            <button type="submit" disabled=move || submitting.get()>"Create Payment"</button>
        </form>
    }
}
