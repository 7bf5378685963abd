//! Application Context
//!
//! Shares the payments panel with every component via the Leptos Context API.

use leptos::prelude::*;
use payments_core::{PaymentsPanel, Subscription};

/// Panel handle plus a version signal bumped on every panel state change
#[derive(Clone, Copy)]
pub struct PanelContext {
    panel: StoredValue<PaymentsPanel, LocalStorage>,
    /// Panel state version - read
    pub version: ReadSignal<u64>,
    /// Keeps the panel watch alive for the lifetime of the app
    _watch: StoredValue<Vec<Subscription>, LocalStorage>,
}

impl PanelContext {
    pub fn new(panel: PaymentsPanel) -> Self {
        let (version, set_version) = signal(0u64);
        let watch = panel.watch(move || set_version.update(|v| *v += 1));
        Self {
            panel: StoredValue::new_local(panel),
            version,
            _watch: StoredValue::new_local(watch),
        }
    }

    /// Owned handle, for event handlers and spawned tasks
    pub fn panel(&self) -> PaymentsPanel {
        self.panel.get_value()
    }

    /// Read panel state; re-runs the calling view whenever the panel changes
    pub fn read<R>(&self, f: impl FnOnce(&PaymentsPanel) -> R) -> R {
        self.version.track();
        self.panel.with_value(f)
    }
}

/// Get the panel context
pub fn use_panel() -> PanelContext {
    use_context::<PanelContext>().expect("PanelContext should be provided")
}
