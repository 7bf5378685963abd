//! Account Payments Panel
//!
//! Owns the four state containers (selection, accounts, payments, form) and
//! the one link between them: the payments query follows the selected
//! account id. Everything is wired in [`PaymentsPanel::new`].

use std::rc::Rc;

use futures::FutureExt;

use crate::api::PaymentsApi;
use crate::config::PanelConfig;
use crate::dependent::{DependentPhase, DependentQuery, KeyedFetch};
use crate::derive;
use crate::form::PaymentForm;
use crate::model::{Account, AccountId, Payment};
use crate::notify::Notifier;
use crate::query::{Fetch, Query, QueryResult, Spawner};
use crate::reactive::{Observable, Subscription};
use crate::selection::{Selection, SelectionState};

#[derive(Clone)]
pub struct PaymentsPanel {
    pub(crate) config: Rc<PanelConfig>,
    pub(crate) api: Rc<dyn PaymentsApi>,
    pub(crate) notifier: Rc<dyn Notifier>,
    pub(crate) selection: SelectionState,
    pub(crate) accounts: Query<Account>,
    pub(crate) payments: DependentQuery<AccountId, Payment>,
    pub(crate) form: Observable<PaymentForm>,
    _payments_link: Rc<Subscription>,
}

impl PaymentsPanel {
    pub fn new(
        api: Rc<dyn PaymentsApi>,
        notifier: Rc<dyn Notifier>,
        spawner: Spawner,
        config: PanelConfig,
    ) -> Self {
        let accounts_api = Rc::clone(&api);
        let fetch_accounts: Fetch<Account> = Rc::new(move || {
            let api = Rc::clone(&accounts_api);
            async move { api.fetch_accounts().await }.boxed_local()
        });

        let payments_api = Rc::clone(&api);
        let fetch_payments: KeyedFetch<AccountId, Payment> = Rc::new(move |account_id: AccountId| {
            let api = Rc::clone(&payments_api);
            async move { api.fetch_payments(&account_id).await }.boxed_local()
        });

        let selection = SelectionState::new();
        let accounts = Query::new("accounts", fetch_accounts, Rc::clone(&spawner));
        let payments = DependentQuery::new("payments", fetch_payments, spawner);
        let payments_link = payments.bind_to(&selection);
        let form = Observable::new(PaymentForm::with_type(config.default_payment_type));

        Self {
            config: Rc::new(config),
            api,
            notifier,
            selection,
            accounts,
            payments,
            form,
            _payments_link: Rc::new(payments_link),
        }
    }

    /// Load the account list. Only the first call fetches.
    pub fn activate(&self) -> bool {
        self.accounts.activate()
    }

    pub fn refresh_accounts(&self) {
        self.accounts.invalidate();
    }

    /// Refetch payments for the selected account. Returns false with no selection.
    pub fn refresh_payments(&self) -> bool {
        self.payments.invalidate()
    }

    /// Row-selection event from the accounts table
    pub fn on_selection_changed(&self, rows: &[Account]) {
        self.selection.apply_rows(rows);
    }

    pub fn select(&self, account: &Account) {
        self.selection.select(account);
    }

    pub fn clear_selection(&self) {
        self.selection.clear();
    }

    /// Input event from the form
    pub fn on_field_changed(&self, name: &str, value: &str) {
        self.form.update(|form| form.set_field(name, value));
    }

    pub fn reset_form(&self) {
        let default_type = self.config.default_payment_type;
        self.form.update(|form| form.reset(default_type));
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection.get()
    }

    pub fn selected_label(&self) -> Option<String> {
        self.selection.selected_label()
    }

    pub fn accounts(&self) -> QueryResult<Account> {
        self.accounts.result()
    }

    /// True while an accounts fetch is outstanding
    pub fn accounts_fetching(&self) -> bool {
        self.accounts.is_fetching()
    }

    pub fn payments(&self) -> QueryResult<Payment> {
        self.payments.result()
    }

    pub fn payments_phase(&self) -> DependentPhase<AccountId> {
        self.payments.phase()
    }

    pub fn form(&self) -> PaymentForm {
        self.form.get()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.with_current(derive::has_selection)
    }

    pub fn is_empty(&self) -> bool {
        let has_selection = self.has_selection();
        self.payments
            .with_result(|payments| derive::is_empty(has_selection, payments))
    }

    pub fn payments_heading(&self) -> Option<String> {
        self.selection.with_current(derive::payments_heading)
    }

    /// Call `f` after any panel state changes. Drop the guards to stop.
    #[must_use = "dropping the guards stops the callbacks"]
    pub fn watch(&self, f: impl Fn() + 'static) -> Vec<Subscription> {
        let f: Rc<dyn Fn()> = Rc::new(f);
        let (on_selection, on_fetching, on_accounts, on_phase, on_payments, on_form) = (
            Rc::clone(&f),
            Rc::clone(&f),
            Rc::clone(&f),
            Rc::clone(&f),
            Rc::clone(&f),
            f,
        );
        vec![
            self.selection.subscribe(move |_| on_selection()),
            self.accounts.subscribe_fetching(move |_| on_fetching()),
            self.accounts.subscribe(move |_| on_accounts()),
            self.payments.subscribe_phase(move |_| on_phase()),
            self.payments.subscribe(move |_| on_payments()),
            self.form.subscribe(move |_| on_form()),
        ]
    }
}
