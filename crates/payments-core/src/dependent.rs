//! Dependent Query Binding
//!
//! A list fetch keyed by a token that follows another piece of state (here,
//! the selected account id).
//!
//! # State machine
//!
//! | phase              | token   | request in flight |
//! |--------------------|---------|-------------------|
//! | `Idle`             | `None`  | no                |
//! | `Fetching(token)`  | `Some`  | yes               |
//! | `Resolved(token)`  | `Some`  | no                |
//!
//! # Invariants
//!
//! 1. A fetch is issued on a token change only when the new token is `Some`
//!    and differs from the previous one.
//! 2. Every issued fetch gets a fresh request id. A completion is applied
//!    only if its request id is still the latest and its token is still the
//!    current one; otherwise it is dropped without touching state. Responses
//!    may therefore arrive in any order.
//! 3. A token change resets the result to `Pending` (or to an empty success
//!    when the token becomes `None`). `invalidate()` keeps the previous
//!    result visible until the refetch lands.
//! 4. The phase is observable on its own, so a refresh that starts, or one
//!    that lands with unchanged rows, still notifies phase subscribers.
//! 5. Superseded requests are not aborted; their futures run to completion
//!    and are ignored on arrival.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use tracing::{debug, warn};

use crate::error::RemoteError;
use crate::model::AccountId;
use crate::query::{QueryResult, Spawner};
use crate::reactive::{Observable, Subscription};
use crate::selection::SelectionState;

/// Remote list fetch keyed by a token
pub type KeyedFetch<K, T> = Rc<dyn Fn(K) -> LocalBoxFuture<'static, Result<Vec<T>, RemoteError>>>;

/// Where the binding is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentPhase<K> {
    Idle,
    Fetching(K),
    Resolved(K),
}

#[derive(Debug)]
struct Control<K> {
    token: Option<K>,
    latest: u64,
}

pub struct DependentQuery<K, T> {
    name: &'static str,
    fetch: KeyedFetch<K, T>,
    spawner: Spawner,
    control: Rc<RefCell<Control<K>>>,
    phase: Observable<DependentPhase<K>>,
    result: Observable<QueryResult<T>>,
}

impl<K, T> Clone for DependentQuery<K, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            fetch: Rc::clone(&self.fetch),
            spawner: Rc::clone(&self.spawner),
            control: Rc::clone(&self.control),
            phase: self.phase.clone(),
            result: self.result.clone(),
        }
    }
}

impl<K, T> fmt::Debug for DependentQuery<K, T>
where
    K: fmt::Debug + Clone + PartialEq + 'static,
    T: fmt::Debug + Clone + PartialEq + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentQuery")
            .field("name", &self.name)
            .field("control", &*self.control.borrow())
            .field("phase", &self.phase)
            .field("result", &self.result)
            .finish()
    }
}

impl<K, T> DependentQuery<K, T>
where
    K: Clone + PartialEq + fmt::Debug + 'static,
    T: Clone + PartialEq + 'static,
{
    /// Starts `Idle` with an empty result
    pub fn new(name: &'static str, fetch: KeyedFetch<K, T>, spawner: Spawner) -> Self {
        Self {
            name,
            fetch,
            spawner,
            control: Rc::new(RefCell::new(Control {
                token: None,
                latest: 0,
            })),
            phase: Observable::new(DependentPhase::Idle),
            result: Observable::new(QueryResult::empty()),
        }
    }

    /// Follow a new token value. Returns whether a fetch was issued.
    pub fn set_token(&self, token: Option<K>) -> bool {
        let request = {
            let mut control = self.control.borrow_mut();
            if control.token == token {
                return false;
            }
            control.token = token.clone();
            control.latest += 1;
            control.latest
        };

        match token {
            None => {
                debug!(query = self.name, "token cleared, going idle");
                self.phase.set(DependentPhase::Idle);
                self.result.set(QueryResult::empty());
                false
            }
            Some(token) => {
                debug!(query = self.name, ?token, request, "token changed");
                self.phase.set(DependentPhase::Fetching(token.clone()));
                self.result.set(QueryResult::Pending);
                self.issue(request, token);
                true
            }
        }
    }

    /// Refetch for the current token. Does nothing while idle.
    pub fn invalidate(&self) -> bool {
        let (request, token) = {
            let mut control = self.control.borrow_mut();
            let Some(token) = control.token.clone() else {
                debug!(query = self.name, "invalidate ignored while idle");
                return false;
            };
            control.latest += 1;
            (control.latest, token)
        };
        debug!(query = self.name, ?token, request, "invalidated");
        self.phase.set(DependentPhase::Fetching(token.clone()));
        self.issue(request, token);
        true
    }

    pub fn token(&self) -> Option<K> {
        self.control.borrow().token.clone()
    }

    pub fn phase(&self) -> DependentPhase<K> {
        self.phase.get()
    }

    pub fn result(&self) -> QueryResult<T> {
        self.result.get()
    }

    pub fn with_result<R>(&self, f: impl FnOnce(&QueryResult<T>) -> R) -> R {
        self.result.with(f)
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&QueryResult<T>) + 'static) -> Subscription {
        self.result.subscribe(f)
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe_phase(&self, f: impl Fn(&DependentPhase<K>) + 'static) -> Subscription {
        self.phase.subscribe(f)
    }

    fn issue(&self, request: u64, token: K) {
        let pending = (self.fetch)(token.clone());
        let control = Rc::downgrade(&self.control);
        let phase = self.phase.clone();
        let result = self.result.clone();
        let name = self.name;
        let resolved = DependentPhase::Resolved(token.clone());
        let task = async move {
            let outcome = pending.await;
            if accept(&control, request, &token, name) {
                phase.set(DependentPhase::Resolved(token));
                result.set(QueryResult::from(outcome));
            }
        };

        if let Err(err) = self.spawner.spawn_local(task) {
            warn!(query = self.name, request, error = %err, "could not schedule fetch");
            self.phase.set(resolved);
            self.result.set(QueryResult::Failure(RemoteError::new(format!(
                "could not schedule fetch: {err}"
            ))));
        }
    }
}

impl<T: Clone + PartialEq + 'static> DependentQuery<AccountId, T> {
    /// Track the selected account id. The returned guard keeps the link alive.
    #[must_use = "dropping the Subscription unbinds the query"]
    pub fn bind_to(&self, selection: &SelectionState) -> Subscription {
        let query = self.clone();
        let subscription = selection.subscribe(move |current| {
            query.set_token(current.as_ref().map(|s| s.id.clone()));
        });
        self.set_token(selection.selected_id());
        subscription
    }
}

fn accept<K: PartialEq + fmt::Debug>(
    control: &Weak<RefCell<Control<K>>>,
    request: u64,
    token: &K,
    name: &'static str,
) -> bool {
    let Some(control) = control.upgrade() else {
        return false;
    };
    let control = control.borrow();
    if control.latest != request || control.token.as_ref() != Some(token) {
        debug!(
            query = name,
            ?token,
            request,
            latest = control.latest,
            "discarding superseded response"
        );
        return false;
    }
    true
}
