//! Payment Table Component
//!
//! Payments of the selected account.

use leptos::prelude::*;
use payments_core::{DependentPhase, Payment, QueryResult};

use crate::context::use_panel;
use crate::format;

#[component]
fn PaymentRow(payment: Payment) -> impl IntoView {
    view! {
        <tr>
            <td>{payment.payment_type.label()}</td>
            <td class="amount">{format::currency(&payment.amount)}</td>
            <td>{format::date(&payment.due_date)}</td>
            <td>{payment.notes.unwrap_or_default()}</td>
        </tr>
    }
}

#[component]
pub fn PaymentTable() -> impl IntoView {
    let ctx = use_panel();

    let body = move || {
        let (has_selection, is_empty, payments) =
            ctx.read(|panel| (panel.has_selection(), panel.is_empty(), panel.payments()));
        if !has_selection {
            return view! { <p class="table-status">"Select an account to see its payments."</p> }.into_any();
        }
        if is_empty {
            return view! { <p class="table-status">"No payments found for this account."</p> }.into_any();
        }
        match payments {
            QueryResult::Pending => view! { <p class="table-status">"Loading payments..."</p> }.into_any(),
            QueryResult::Failure(err) => view! {
                <p class="table-status error">{err.message_or("Could not load payments.").to_string()}</p>
            }.into_any(),
            QueryResult::Success(rows) => view! {
                <table>
                    <thead>
                        <tr>
                            <th>"Payment Type"</th>
                            <th>"Amount"</th>
                            <th>"Due Date"</th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|payment| view! { <PaymentRow payment=payment /> }).collect_view()}
                    </tbody>
                </table>
            }.into_any(),
        }
    };

    let refreshing = move || {
        ctx.read(|panel| {
            matches!(panel.payments_phase(), DependentPhase::Fetching(_)) && !panel.payments().is_pending()
        })
    };

    view! {
        <section class="payment-table">
            <div class="table-header">
                <h2>{move || ctx.read(|panel| panel.payments_heading()).unwrap_or_else(|| "Payments".to_string())}</h2>
                <Show when=move || ctx.read(|panel| panel.has_selection())>
                    <button
                        type="button"
                        class="refresh-btn"
                        disabled=refreshing
                        on:click=move |_| { ctx.panel().refresh_payments(); }
                    >
                        {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </Show>
            </div>
            {body}
        </section>
    }
}
