//! Account Payments Core
//!
//! State and synchronization for a master-detail payments panel: pick an
//! account, see its payments, add a payment.
//!
//! Layers:
//! - model / error / config: records, error types, toast wording
//! - reactive / selection / form: observable state containers
//! - query / dependent: list bindings, the payments one keyed by the
//!   selected account and immune to out-of-order responses
//! - panel / mutation / derive: wiring, the create command, view projections
//!
//! Everything runs on one thread. Remote calls are spawned on a
//! [`futures::task::LocalSpawn`] supplied by the host.

pub mod api;
pub mod config;
pub mod dependent;
pub mod derive;
pub mod error;
pub mod form;
pub mod model;
pub mod mutation;
pub mod notify;
pub mod panel;
pub mod query;
pub mod reactive;
pub mod selection;

pub use api::PaymentsApi;
pub use config::{Messages, PanelConfig};
pub use dependent::{DependentPhase, DependentQuery, KeyedFetch};
pub use error::{ConfigError, PanelError, PanelResult, RemoteError, ValidationError};
pub use form::{FormField, PaymentForm};
pub use model::{Account, AccountId, NewPayment, Payment, PaymentType};
pub use mutation::build_payload;
pub use notify::{Notifier, Severity, Toast};
pub use panel::PaymentsPanel;
pub use query::{Fetch, Query, QueryResult, Spawner};
pub use reactive::{Observable, Subscription};
pub use selection::{Selection, SelectionState};
