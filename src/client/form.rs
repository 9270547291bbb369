//! Form state controller shared by the create and edit screens.
//!
//! Holds the working copy of a payload plus per-field errors and submit
//! bookkeeping. Validation runs locally through [`validate_record`] before
//! any remote call, so the platform adapter is never invoked with invalid
//! values and at most one submit is in flight per form.

use validator::Validate;

use crate::validation::{validate_record, ValidationRejection};

/// Working state of one record form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    /// Current form values
    pub values: T,
    /// Field violations from the last validation or server rejection
    pub errors: ValidationRejection,
    /// Whether the values have been edited since the last seed
    pub dirty: bool,
    /// Whether a submit is currently in flight
    pub submitting: bool,
}

impl<T: Validate + Clone> FormState<T> {
    /// Creates form state around the initial values
    pub fn new(initial: T) -> Self {
        Self {
            values: initial,
            errors: ValidationRejection::default(),
            dirty: false,
            submitting: false,
        }
    }

    /// Replaces the values with a freshly fetched record, clearing edits and errors
    pub fn seed(&mut self, values: T) {
        self.values = values;
        self.errors = ValidationRejection::default();
        self.dirty = false;
    }

    /// Applies an edit to the values and marks the form dirty
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.values);
        self.dirty = true;
    }

    /// Starts a submit, returning a snapshot of the values for the remote call
    ///
    /// Returns `None` without side effects when a submit is already in
    /// flight, and `None` with the field errors set when validation rejects
    /// the current values.
    pub fn begin_submit(&mut self) -> Option<T> {
        if self.submitting {
            return None;
        }

        if let Err(rejection) = validate_record(&self.values) {
            self.errors = rejection;
            return None;
        }

        self.errors = ValidationRejection::default();
        self.submitting = true;

        Some(self.values.clone())
    }

    /// Ends a successful submit, clearing edits and errors
    pub fn finish_submit_success(&mut self) {
        self.submitting = false;
        self.dirty = false;
        self.errors = ValidationRejection::default();
    }

    /// Ends a failed submit, keeping the edited values
    pub fn finish_submit_failure(&mut self) {
        self.submitting = false;
    }

    /// Replaces the field errors with a rejection returned by the API
    pub fn set_rejection(&mut self, rejection: ValidationRejection) {
        self.errors = rejection;
    }

    /// Message for one field, if that field failed validation
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors.message_for(field)
    }
}
