//! Account Payments App
//!
//! Accounts on the left, the selected account's payments and the new
//! payment form on the right.

use std::rc::Rc;

use leptos::prelude::*;
use payments_core::PaymentsPanel;

use crate::commands::TauriApi;
use crate::components::{AccountTable, NewPaymentForm, PaymentTable, ToastHost};
use crate::config;
use crate::context::PanelContext;
use crate::spawner::LeptosSpawner;
use crate::toast::{ToastEntry, ToastNotifier};

#[component]
pub fn App() -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastEntry>::new());

    let panel = PaymentsPanel::new(
        Rc::new(TauriApi),
        Rc::new(ToastNotifier::new(set_toasts)),
        Rc::new(LeptosSpawner),
        config::load(),
    );
    panel.activate();

    // Provide context to all children
    provide_context(PanelContext::new(panel));

    view! {
        <div class="app-layout">
            <aside class="accounts-column">
                <AccountTable />
            </aside>
            <main class="payments-column">
                <PaymentTable />
                <NewPaymentForm />
            </main>
            <ToastHost toasts=toasts set_toasts=set_toasts />
        </div>
    }
}
