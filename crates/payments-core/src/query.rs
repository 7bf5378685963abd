//! Independent Query Binding
//!
//! Fetches a list once on activation and again on `invalidate()`. Every fetch
//! carries a request id; a completion is applied only if no newer request was
//! issued in the meantime.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use futures::task::{LocalSpawn, LocalSpawnExt};
use tracing::{debug, warn};

use crate::error::RemoteError;
use crate::reactive::{Observable, Subscription};

/// Executor handle used to run fetches on the current thread
pub type Spawner = Rc<dyn LocalSpawn>;

/// Remote list fetch
pub type Fetch<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Vec<T>, RemoteError>>>;

/// Outcome of a list query; exactly one variant is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<T> {
    Pending,
    Success(Vec<T>),
    Failure(RemoteError),
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        QueryResult::Pending
    }
}

impl<T> QueryResult<T> {
    pub fn empty() -> Self {
        QueryResult::Success(Vec::new())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryResult::Pending)
    }

    pub fn data(&self) -> Option<&[T]> {
        match self {
            QueryResult::Success(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RemoteError> {
        match self {
            QueryResult::Failure(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<Vec<T>, RemoteError>> for QueryResult<T> {
    fn from(outcome: Result<Vec<T>, RemoteError>) -> Self {
        match outcome {
            Ok(rows) => QueryResult::Success(rows),
            Err(err) => QueryResult::Failure(err),
        }
    }
}

#[derive(Debug, Default)]
struct Control {
    activated: bool,
    latest: u64,
}

/// List binding with no dependencies
pub struct Query<T> {
    name: &'static str,
    fetch: Fetch<T>,
    spawner: Spawner,
    control: Rc<RefCell<Control>>,
    fetching: Observable<bool>,
    result: Observable<QueryResult<T>>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            fetch: Rc::clone(&self.fetch),
            spawner: Rc::clone(&self.spawner),
            control: Rc::clone(&self.control),
            fetching: self.fetching.clone(),
            result: self.result.clone(),
        }
    }
}

impl<T: fmt::Debug + Clone + PartialEq + 'static> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("name", &self.name)
            .field("control", &*self.control.borrow())
            .field("fetching", &self.fetching)
            .field("result", &self.result)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Query<T> {
    pub fn new(name: &'static str, fetch: Fetch<T>, spawner: Spawner) -> Self {
        Self {
            name,
            fetch,
            spawner,
            control: Rc::new(RefCell::new(Control::default())),
            fetching: Observable::new(false),
            result: Observable::new(QueryResult::Pending),
        }
    }

    /// Issue the initial fetch. Only the first call does anything.
    pub fn activate(&self) -> bool {
        {
            let mut control = self.control.borrow_mut();
            if control.activated {
                return false;
            }
            control.activated = true;
        }
        self.issue();
        true
    }

    /// Re-issue the fetch; the current result stays visible until it lands
    pub fn invalidate(&self) {
        self.control.borrow_mut().activated = true;
        self.issue();
    }

    pub fn result(&self) -> QueryResult<T> {
        self.result.get()
    }

    pub fn with_result<R>(&self, f: impl FnOnce(&QueryResult<T>) -> R) -> R {
        self.result.with(f)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.get()
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe_fetching(&self, f: impl Fn(&bool) + 'static) -> Subscription {
        self.fetching.subscribe(f)
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&QueryResult<T>) + 'static) -> Subscription {
        self.result.subscribe(f)
    }

    fn issue(&self) {
        let request = {
            let mut control = self.control.borrow_mut();
            control.latest += 1;
            control.latest
        };
        self.fetching.set(true);
        debug!(query = self.name, request, "fetch issued");

        let pending = (self.fetch)();
        let control = Rc::downgrade(&self.control);
        let fetching = self.fetching.clone();
        let result = self.result.clone();
        let name = self.name;
        let task = async move {
            let outcome = pending.await;
            if accept(&control, request, name) {
                fetching.set(false);
                result.set(QueryResult::from(outcome));
            }
        };

        if let Err(err) = self.spawner.spawn_local(task) {
            warn!(query = self.name, request, error = %err, "could not schedule fetch");
            self.fetching.set(false);
            self.result.set(QueryResult::Failure(RemoteError::new(format!(
                "could not schedule fetch: {err}"
            ))));
        }
    }
}

fn accept(control: &Weak<RefCell<Control>>, request: u64, name: &'static str) -> bool {
    let Some(control) = control.upgrade() else {
        return false;
    };
    let control = control.borrow();
    if control.latest != request {
        debug!(query = name, request, latest = control.latest, "discarding superseded response");
        return false;
    }
    true
}
