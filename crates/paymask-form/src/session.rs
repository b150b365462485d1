//! Payment form session state container.
//!
//! A [`FormSession`] owns the committed field values for one form, from the
//! moment the form is shown until it is discarded. Every change goes
//! through a field masker, and every committed change produces a new
//! immutable [`FormSnapshot`] carrying the revalidated result and the
//! submit-enabled flag.
//!
//! # Flow
//!
//! ```text
//! keystroke ──> Masker ──commit──> PaymentFields ──> FormValidator ──> is_form_valid
//!                 │                                                        │
//!                 └──reject (no change)                       observers <──┘
//! ```
//!
//! Revalidation is synchronous: when `input` returns, subscribers have
//! already seen the new snapshot.
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use paymask_core::Field;
//! use paymask_form::FormSession;
//!
//! let mut session = FormSession::new();
//!
//! let enabled = Arc::new(Mutex::new(false));
//! let sink = Arc::clone(&enabled);
//! session.subscribe(move |snapshot| *sink.lock().unwrap() = snapshot.is_valid);
//!
//! session.input(Field::Cvv, "1");
//! assert_eq!(session.value(Field::Cvv), "1");
//! assert!(!*enabled.lock().unwrap());
//!
//! // Letters are silently refused
//! session.input(Field::Cvv, "1a");
//! assert_eq!(session.value(Field::Cvv), "1");
//! ```

use std::collections::VecDeque;
use std::fmt;

use paymask_core::{Error, Field, PaymentFields, Result, SubmissionPayload};
use paymask_input::{MaskOutcome, masker_for};
use serde::Serialize;
use tracing::{debug, trace};

use crate::canonical::canonicalize;
use crate::config::FormConfig;
use crate::validator::{FormValidator, ValidationResult, is_form_valid};

/// Committed values together with their validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Committed, display-formatted field values.
    pub fields: PaymentFields,

    /// Per-field validation messages.
    pub validation: ValidationResult,

    /// Whether the submit control is enabled.
    pub is_valid: bool,
}

impl FormSnapshot {
    fn evaluate(validator: &FormValidator, fields: PaymentFields) -> Self {
        let validation = validator.validate(&fields);
        let is_valid = is_form_valid(&validation);
        Self {
            fields,
            validation,
            is_valid,
        }
    }
}

/// Handle returned by [`FormSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FormSnapshot) + Send>;

/// State container for one payment form.
///
/// # Thread Safety
///
/// The session is `Send` but not `Sync`. Keystrokes for a form arrive on a
/// single input stream and are applied in order; wrap the session in a
/// mutex if several tasks must reach it.
pub struct FormSession {
    /// Current committed values and their validation.
    snapshot: FormSnapshot,

    /// Validator applied after every committed change.
    validator: FormValidator,

    /// Previous field values, oldest first.
    history: VecDeque<PaymentFields>,

    /// Maximum number of entries in `history`.
    history_size: usize,

    /// Subscribers notified after every committed change.
    observers: Vec<(SubscriptionId, Observer)>,

    next_subscription: u64,
}

impl FormSession {
    /// Create an empty session with default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create an empty session with the given configuration.
    pub fn with_config(config: FormConfig) -> Self {
        let validator = match config.reference_date {
            Some(date) => FormValidator::new().with_reference_date(date),
            None => FormValidator::new(),
        };

        Self {
            snapshot: FormSnapshot::evaluate(&validator, PaymentFields::new()),
            validator,
            history: VecDeque::with_capacity(config.history_size),
            history_size: config.history_size,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Get the committed field values.
    pub fn fields(&self) -> &PaymentFields {
        &self.snapshot.fields
    }

    /// Get the committed value of one field.
    pub fn value(&self, field: Field) -> &str {
        self.snapshot.fields.get(field)
    }

    /// Get the current validation result.
    pub fn validation(&self) -> &ValidationResult {
        &self.snapshot.validation
    }

    /// Check whether the form may be submitted.
    pub fn is_valid(&self) -> bool {
        self.snapshot.is_valid
    }

    /// Get the current snapshot.
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Number of snapshots available to [`undo`](FormSession::undo).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply a proposed value from the keystroke channel.
    ///
    /// `proposed` is the full candidate value of the field after the edit.
    /// A rejected value leaves the session untouched.
    pub fn input(&mut self, field: Field, proposed: &str) -> MaskOutcome {
        let outcome = masker_for(field).mask(proposed);
        self.apply(field, &outcome);
        outcome
    }

    /// Apply the deletion key to a field.
    pub fn delete_backward(&mut self, field: Field) -> MaskOutcome {
        let outcome = masker_for(field).delete_backward(self.value(field));
        self.apply(field, &outcome);
        outcome
    }

    /// Register an observer called after every committed change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&FormSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Restore the previous field values.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(fields) => {
                debug!("Undo to previous form state");
                self.replace(fields);
                true
            }
            None => false,
        }
    }

    /// Clear every field. The cleared state can be undone.
    pub fn reset(&mut self) {
        if self.snapshot.fields.is_empty() {
            return;
        }
        self.push_history(self.snapshot.fields.clone());
        self.replace(PaymentFields::new());
    }

    /// Re-run validation against the current date.
    ///
    /// Useful for long-lived forms when the month rolls over. Observers are
    /// notified only if the result changed.
    pub fn revalidate(&mut self) {
        let snapshot = FormSnapshot::evaluate(&self.validator, self.snapshot.fields.clone());
        if snapshot != self.snapshot {
            self.snapshot = snapshot;
            self.notify();
        }
    }

    /// Build the submission payload from the committed values.
    ///
    /// # Errors
    ///
    /// Returns `Error::FormInvalid` listing the invalid fields if the form is
    /// not valid, or `Error::InvalidAmount` if canonicalization fails.
    pub fn payload(&self) -> Result<SubmissionPayload> {
        if !self.snapshot.is_valid {
            let invalid: Vec<&str> = self
                .snapshot
                .validation
                .errors()
                .map(|(field, _)| field.as_str())
                .collect();
            return Err(Error::FormInvalid(invalid.join(", ")));
        }
        canonicalize(&self.snapshot.fields)
    }

    fn apply(&mut self, field: Field, outcome: &MaskOutcome) {
        match outcome {
            MaskOutcome::Commit(value) => self.commit(field, value),
            MaskOutcome::Reject(reason) => trace!(%field, %reason, "Keystroke rejected"),
        }
    }

    fn commit(&mut self, field: Field, value: &str) {
        if self.value(field) == value {
            return;
        }
        debug!(%field, len = value.chars().count(), "Committed field value");

        let next = self.snapshot.fields.with_field(field, value);
        self.push_history(self.snapshot.fields.clone());
        self.replace(next);
    }

    fn replace(&mut self, fields: PaymentFields) {
        self.snapshot = FormSnapshot::evaluate(&self.validator, fields);
        debug!(
            valid = self.snapshot.is_valid,
            errors = self.snapshot.validation.len(),
            "Form revalidated"
        );
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = &self.snapshot;
        for (_, observer) in self.observers.iter_mut() {
            observer(snapshot);
        }
    }

    fn push_history(&mut self, fields: PaymentFields) {
        if self.history_size == 0 {
            return;
        }
        self.history.push_back(fields);
        if self.history.len() > self.history_size {
            self.history.pop_front();
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("snapshot", &self.snapshot)
            .field("history_len", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
