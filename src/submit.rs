//! Submission Flow
//!
//! Shared by every form: validate, forward, then record locally. Local storage
//! and the store are only touched after the server confirmed the forward.

use std::future::Future;

use intake_domain::{
    DomainError, FieldErrors, IntakeForm, KeyValueStorage, RecordLog, RequestKind, Submission,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::storage;
use crate::store::{AppStore, StoredRecords};

/// Signals owned by one open form
pub struct FormState<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F> FormState<F>
where
    F: IntakeForm + Clone + Send + Sync + 'static,
    F::Record: StoredRecords,
{
    pub fn new(initial: F) -> Self {
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            submitting: RwSignal::new(false),
        }
    }

    /// Run the submit flow; `on_done` fires once the record is saved
    pub fn submit(self, store: AppStore, on_done: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }

        let record = match self.form.with_untracked(|f| f.submit(&Submission::now())) {
            Ok(record) => record,
            Err(errors) => {
                web_sys::console::log_1(
                    &format!("[FORM] {} blocked: {}", <F::Record as RequestKind>::LABEL, errors).into(),
                );
                self.errors.set(errors);
                return;
            }
        };

        self.errors.set(FieldErrors::new());
        self.submitting.set(true);
        let submitting = self.submitting;

        spawn_local(async move {
            let log = storage::record_log();
            let forward = |record: F::Record| async move { api::submit(&record).await };
            let saved = move |delivery: Delivery<F::Record>| {
                let record = delivery.report();
                <F::Record as StoredRecords>::push(store, record);
                submitting.set(false);
                on_done.run(());
            };

            if let Err(message) = deliver(record, forward, &log, saved).await {
                submitting.set(false);
                alert(&message);
            }
        });
    }
}

/// A forwarded record and whether the local copy was written
pub enum Delivery<K> {
    Saved { record: K, total: usize },
    Unsaved { record: K, error: DomainError },
}

impl<K: RequestKind> Delivery<K> {
    /// Log the outcome and hand back the record
    fn report(self) -> K {
        match self {
            Delivery::Saved { record, total } => {
                web_sys::console::log_1(
                    &format!("[FORM] Saved {} {} ({} total)", K::LABEL, record.id(), total).into(),
                );
                record
            }
            Delivery::Unsaved { record, error } => {
                web_sys::console::error_1(
                    &format!("[FORM] {} forwarded but not saved locally: {}", record.id(), error)
                        .into(),
                );
                record
            }
        }
    }
}

/// Forward one record, and only once the server accepted it append it to the
/// log and call `on_saved`. A failed forward touches nothing.
pub async fn deliver<K, S, Fut>(
    record: K,
    forward: impl FnOnce(K) -> Fut,
    log: &RecordLog<S>,
    on_saved: impl FnOnce(Delivery<K>),
) -> Result<(), String>
where
    K: RequestKind,
    S: KeyValueStorage,
    Fut: Future<Output = Result<(), String>>,
{
    forward(record.clone()).await?;

    let delivery = match log.append(&record) {
        Ok(total) => Delivery::Saved { record, total },
        Err(error) => Delivery::Unsaved { record, error },
    };
    on_saved(delivery);
    Ok(())
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
