//! Account Table Component
//!
//! Single-select list of accounts. Clicking the selected row deselects it.

use leptos::prelude::*;
use payments_core::{Account, QueryResult};

use crate::context::use_panel;

#[component]
pub fn AccountTable() -> impl IntoView {
    let ctx = use_panel();

    let on_row_click = move |account: Account| {
        let panel = ctx.panel();
        let already_selected = panel.selection().is_some_and(|s| s.id == account.id);
        if already_selected {
            panel.on_selection_changed(&[]);
        } else {
            panel.on_selection_changed(std::slice::from_ref(&account));
        }
    };

    view! {
        <section class="account-table">
            <div class="table-header">
                <h2>"Accounts"</h2>
                <button
                    type="button"
                    class="refresh-btn"
                    disabled=move || ctx.read(|panel| panel.accounts_fetching())
                    on:click=move |_| ctx.panel().refresh_accounts()
                >
                    {move || if ctx.read(|panel| panel.accounts_fetching()) { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            {move || match ctx.read(|panel| panel.accounts()) {
                QueryResult::Pending => view! { <p class="table-status">"Loading accounts..."</p> }.into_any(),
                QueryResult::Failure(err) => view! {
                    <p class="table-status error">{err.message_or("Could not load accounts.").to_string()}</p>
                }.into_any(),
                QueryResult::Success(accounts) => view! {
                    <table>
                        <thead>
                            <tr><th>"Account Name"</th></tr>
                        </thead>
                        <tbody>
                            {accounts.into_iter().map(|account| {
                                let id = account.id.clone();
                                let name = account.name.clone();
                                let is_selected = move || ctx.read(|panel| {
                                    panel.selection().is_some_and(|s| s.id == id)
                                });
                                view! {
                                    <tr
                                        class=move || if is_selected() { "account-row selected" } else { "account-row" }
                                        on:click=move |_| on_row_click(account.clone())
                                    >
                                        <td>{name}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
