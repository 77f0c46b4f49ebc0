//! Field Validation
//!
//! Forms collect errors keyed by their wire field name (`contactName`,
//! `hours.Monday`, ...) so the UI can render each message next to its input.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Ordered field -> message map; the first error recorded for a field wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.contains(&field) {
            self.0.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Drop every error whose field starts with `prefix`, e.g. per-row
    /// `holidays.` errors once the rows shift
    pub fn remove_prefixed(&mut self, prefix: &str) {
        self.0.retain(|(name, _)| !name.starts_with(prefix));
    }

    /// Record an error when `value` is blank after trimming
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            return false;
        }
        true
    }

    pub fn require_email(&mut self, field: &str, value: &str) {
        if self.require(field, value, "Email is required") && !is_valid_email(value.trim()) {
            self.insert(field, "Invalid email address");
        }
    }

    /// Prices are free text but must read as a positive number (`$` allowed)
    pub fn require_price(&mut self, field: &str, value: &str, missing: &str) {
        if !self.require(field, value, missing) {
            return;
        }
        let amount = value.trim().trim_start_matches('$').trim().parse::<f64>();
        match amount {
            Ok(v) if v.is_finite() && v > 0.0 => {}
            _ => self.insert(field, "Price must be a positive number"),
        }
    }

    /// Optional date fields must still be a real date when filled in
    pub fn check_date(&mut self, field: &str, value: &str) {
        if !value.trim().is_empty() && crate::dates::parse_input_date(value).is_none() {
            self.insert(field, "Enter a valid date");
        }
    }

    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}
