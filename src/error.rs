use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::service::error::ServiceError;

/// Field name -> first failing message, ready to show next to the input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                out.insert(field, message);
            }
        }
        out
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

/// Transient, non-blocking advisory shown on top of the current screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self { level: ToastLevel::Success, title: title.into(), description: None }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self { level: ToastLevel::Info, title: title.into(), description: None }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self { level: ToastLevel::Error, title: title.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&ServiceError> for Toast {
    fn from(error: &ServiceError) -> Self {
        match error {
            ServiceError::Validation(fields) => {
                Toast::error(fields.first_message().unwrap_or("Please fill in all required fields"))
            }
            ServiceError::InsufficientCredits { required, .. } => Toast::error("Insufficient credits")
                .with_description(format!(
                    "You need at least {} credit{} to send an offer",
                    required,
                    if *required == 1 { "" } else { "s" }
                )),
            ServiceError::DuplicateReview(_) => Toast::error("You already reviewed this job"),
            ServiceError::EmailTaken(_) => Toast::error("An account with this email already exists"),
            ServiceError::NotSignedIn | ServiceError::RoleRequired => {
                Toast::error("Please sign in to continue")
            }
            _ => Toast::error("Something went wrong").with_description(error.to_string()),
        }
    }
}

impl From<ServiceError> for Toast {
    fn from(error: ServiceError) -> Self {
        Toast::from(&error)
    }
}
