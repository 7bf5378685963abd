//! Test doubles for driving a panel on a `LocalPool`.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use payments_core::{
    Account, AccountId, NewPayment, Notifier, PanelConfig, Payment, PaymentType, PaymentsApi,
    PaymentsPanel, RemoteError, Toast,
};
use rust_decimal::Decimal;

type PaymentsReply = oneshot::Sender<Result<Vec<Payment>, RemoteError>>;

/// Accounts and creates answer immediately; payment fetches wait for the test
pub struct FakeApi {
    accounts: RefCell<Result<Vec<Account>, RemoteError>>,
    account_calls: Cell<usize>,
    payment_calls: RefCell<Vec<AccountId>>,
    pending_payments: RefCell<Vec<(AccountId, PaymentsReply)>>,
    create_result: RefCell<Result<(), RemoteError>>,
    created: RefCell<Vec<NewPayment>>,
}

impl FakeApi {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RefCell::new(Ok(accounts)),
            account_calls: Cell::new(0),
            payment_calls: RefCell::new(Vec::new()),
            pending_payments: RefCell::new(Vec::new()),
            create_result: RefCell::new(Ok(())),
            created: RefCell::new(Vec::new()),
        }
    }

    pub fn fail_accounts(&self, err: RemoteError) {
        *self.accounts.borrow_mut() = Err(err);
    }

    pub fn fail_creates(&self, err: RemoteError) {
        *self.create_result.borrow_mut() = Err(err);
    }

    pub fn account_calls(&self) -> usize {
        self.account_calls.get()
    }

    /// Every payments fetch issued so far, in order
    pub fn payment_calls(&self) -> Vec<AccountId> {
        self.payment_calls.borrow().clone()
    }

    /// Account ids of payment fetches still waiting for a reply
    pub fn pending(&self) -> Vec<AccountId> {
        self.pending_payments
            .borrow()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn created(&self) -> Vec<NewPayment> {
        self.created.borrow().clone()
    }

    /// Answer the `index`-th outstanding payments fetch
    pub fn reply_payments(&self, index: usize, outcome: Result<Vec<Payment>, RemoteError>) {
        let (_, tx) = self.pending_payments.borrow_mut().remove(index);
        let _ = tx.send(outcome);
    }
}

#[async_trait(?Send)]
impl PaymentsApi for FakeApi {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, RemoteError> {
        self.account_calls.set(self.account_calls.get() + 1);
        self.accounts.borrow().clone()
    }

    async fn fetch_payments(&self, account_id: &AccountId) -> Result<Vec<Payment>, RemoteError> {
        let (tx, rx) = oneshot::channel();
        self.payment_calls.borrow_mut().push(account_id.clone());
        self.pending_payments
            .borrow_mut()
            .push((account_id.clone(), tx));
        rx.await
            .unwrap_or_else(|_| Err(RemoteError::new("reply dropped")))
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<(), RemoteError> {
        self.created.borrow_mut().push(payment);
        self.create_result.borrow().clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub struct Fixture {
    pub pool: LocalPool,
    pub api: Rc<FakeApi>,
    pub notifier: Rc<RecordingNotifier>,
    pub panel: PaymentsPanel,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_accounts(vec![acme(), globex()])
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self::build(accounts, PanelConfig::default())
    }

    pub fn with_config(config: PanelConfig) -> Self {
        Self::build(vec![acme(), globex()], config)
    }

    fn build(accounts: Vec<Account>, config: PanelConfig) -> Self {
        let pool = LocalPool::new();
        let api = Rc::new(FakeApi::new(accounts));
        let notifier = Rc::new(RecordingNotifier::default());
        let panel = PaymentsPanel::new(
            api.clone(),
            notifier.clone(),
            Rc::new(pool.spawner()),
            config,
        );
        Self {
            pool,
            api,
            notifier,
            panel,
        }
    }

    /// Run every spawned task until none can make progress
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    /// Reply to the single outstanding payments fetch and settle
    pub fn resolve_only(&mut self, rows: Vec<Payment>) {
        assert_eq!(self.api.pending().len(), 1, "expected exactly one outstanding fetch");
        self.api.reply_payments(0, Ok(rows));
        self.settle();
    }

    pub fn fill_form(&self) {
        self.panel.on_field_changed("paymentType", "Product");
        self.panel.on_field_changed("amount", "250.00");
        self.panel.on_field_changed("dueDate", "2026-11-30");
        self.panel.on_field_changed("notes", "Q4 licence");
    }
}

pub fn acme() -> Account {
    Account::new("001A", "Acme")
}

pub fn globex() -> Account {
    Account::new("001B", "Globex")
}

pub fn payment(account: &Account, cents: i64) -> Payment {
    Payment {
        payment_type: PaymentType::Service,
        amount: Decimal::new(cents, 2),
        due_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        notes: None,
        account_id: account.id.clone(),
    }
}
