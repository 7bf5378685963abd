//! Selection State
//!
//! The chosen account. Id and label change together, and observers hear
//! about a change before `select`/`clear` return.

use tracing::debug;

use crate::model::{Account, AccountId};
use crate::reactive::{Observable, Subscription};

/// The selected account's id and display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: AccountId,
    pub label: String,
}

impl From<&Account> for Selection {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            label: account.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    current: Observable<Option<Selection>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            current: Observable::new(None),
        }
    }

    pub fn select(&self, account: &Account) {
        debug!(account_id = %account.id, "account selected");
        self.current.set(Some(Selection::from(account)));
    }

    pub fn clear(&self) {
        if self.current.set(None) {
            debug!("account selection cleared");
        }
    }

    /// Row-selection handler: the first row wins, no rows means deselect
    pub fn apply_rows(&self, rows: &[Account]) {
        match rows.first() {
            Some(account) => self.select(account),
            None => self.clear(),
        }
    }

    pub fn get(&self) -> Option<Selection> {
        self.current.get()
    }

    pub fn selected_id(&self) -> Option<AccountId> {
        self.current.with(|s| s.as_ref().map(|s| s.id.clone()))
    }

    pub fn selected_label(&self) -> Option<String> {
        self.current.with(|s| s.as_ref().map(|s| s.label.clone()))
    }

    pub fn with_current<R>(&self, f: impl FnOnce(&Option<Selection>) -> R) -> R {
        self.current.with(f)
    }

    pub fn is_selected(&self) -> bool {
        self.current.with(Option::is_some)
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&Option<Selection>) + 'static) -> Subscription {
        self.current.subscribe(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_select_sets_id_and_label() {
        let state = SelectionState::new();
        state.select(&Account::new("001", "Acme"));

        assert_eq!(state.selected_id(), Some(AccountId::new("001")));
        assert_eq!(state.selected_label().as_deref(), Some("Acme"));
    }

    #[test]
    fn test_clear_unsets_both() {
        let state = SelectionState::new();
        state.select(&Account::new("001", "Acme"));
        state.clear();

        assert!(state.selected_id().is_none());
        assert!(state.selected_label().is_none());
    }

    #[test]
    fn test_observer_runs_before_select_returns() {
        let state = SelectionState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = state.subscribe(move |sel| {
            s.borrow_mut().push(sel.as_ref().map(|x| (x.id.to_string(), x.label.clone())))
        });

        state.select(&Account::new("001", "Acme"));
        assert_eq!(
            *seen.borrow(),
            vec![Some(("001".to_string(), "Acme".to_string()))]
        );
        state.clear();
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    #[test]
    fn test_apply_rows() {
        let state = SelectionState::new();
        state.apply_rows(&[Account::new("002", "Globex"), Account::new("003", "Initech")]);
        assert_eq!(state.selected_id(), Some(AccountId::new("002")));

        state.apply_rows(&[]);
        assert!(!state.is_selected());
    }
}
