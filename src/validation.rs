//! Declarative record validation shared by the form screens and the API.
//!
//! Validation rules are declared on the payload DTOs in [`crate::model`] and
//! evaluated with the `validator` crate. Failures are flattened into a
//! [`ValidationRejection`] holding one message per field, which the form
//! screens render inline and the API returns as a 422 response body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Field validation failures keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ValidationRejection {
    /// First failure message per field
    pub errors: BTreeMap<String, String>,
}

impl ValidationRejection {
    /// Message for one field, if that field failed validation
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a payload, flattening failures to one message per field
pub fn validate_record<T: Validate>(record: &T) -> Result<(), ValidationRejection> {
    match record.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(flatten(&errors)),
    }
}

fn flatten(errors: &ValidationErrors) -> ValidationRejection {
    let mut flattened = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = match &first.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            };
            flattened.insert(field.to_string(), message);
        }
    }

    ValidationRejection { errors: flattened }
}
