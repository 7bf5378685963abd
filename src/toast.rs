//! Toast Notifications
//!
//! `Notifier` backed by a signal list rendered by `ToastHost`.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use payments_core::{Notifier, Severity, Toast};

/// How long a toast stays up (ms)
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

pub struct ToastNotifier {
    set_toasts: WriteSignal<Vec<ToastEntry>>,
    next_id: Cell<u32>,
}

impl ToastNotifier {
    pub fn new(set_toasts: WriteSignal<Vec<ToastEntry>>) -> Self {
        Self {
            set_toasts,
            next_id: Cell::new(0),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        if toast.severity == Severity::Error {
            web_sys::console::warn_1(&format!("[Toast] {}: {}", toast.title, toast.message).into());
        }
        self.set_toasts.update(|list| list.push(ToastEntry { id, toast }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            dismiss(set_toasts, id);
        });
    }
}

pub fn dismiss(set_toasts: WriteSignal<Vec<ToastEntry>>, id: u32) {
    set_toasts.update(|list| list.retain(|entry| entry.id != id));
}
