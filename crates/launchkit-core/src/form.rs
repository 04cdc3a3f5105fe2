//! Wizard form state: a flat map of field name to string value.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Known form field names.
///
/// The form itself accepts arbitrary keys; these constants are the fields the
/// template engine and completion scoring know about.
pub mod fields {
    pub const COMPANY_NAME: &str = "company_name";
    pub const PRODUCT_DESCRIPTION: &str = "product_description";
    pub const COUNTRY: &str = "country";
    pub const CONTACT_EMAIL: &str = "contact_email";
    pub const COOKIE_LEVEL: &str = "cookie_level";
    pub const JURISDICTION: &str = "jurisdiction";
    pub const SERVICES_USED: &str = "services_used";
    pub const COMPANY_LEAD: &str = "company_lead";

    /// All known fields, in wizard order.
    pub const ALL: [&str; 8] = [
        COMPANY_NAME,
        PRODUCT_DESCRIPTION,
        COUNTRY,
        CONTACT_EMAIL,
        COOKIE_LEVEL,
        JURISDICTION,
        SERVICES_USED,
        COMPANY_LEAD,
    ];
}

/// Form data collected by the wizard.
///
/// All values are optional strings; consumers must degrade gracefully for
/// every missing field. Only input handlers mutate a form; the template
/// engine and completion scoring are read-only over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder-style set, for tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value of a field, if ever set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Trimmed, non-empty value of a field.
    ///
    /// This is the predicate used everywhere a field "counts": completion
    /// scoring, analyze guards, placeholder resolution.
    pub fn trimmed(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Whether a field has a trimmed, non-empty value.
    pub fn is_completed(&self, field: &str) -> bool {
        self.trimmed(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_drops_whitespace_only_values() {
        let form = FormData::new()
            .with(fields::COMPANY_NAME, "  Acme  ")
            .with(fields::CONTACT_EMAIL, "   ");

        assert_eq!(form.trimmed(fields::COMPANY_NAME), Some("Acme"));
        assert_eq!(form.trimmed(fields::CONTACT_EMAIL), None);
        assert!(!form.is_completed(fields::CONTACT_EMAIL));
        assert_eq!(form.trimmed("never_set"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut form = FormData::new();
        form.set(fields::COUNTRY, "Germany");
        form.set(fields::COUNTRY, "France");
        assert_eq!(form.get(fields::COUNTRY), Some("France"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let form = FormData::new().with(fields::COMPANY_NAME, "Acme");
        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(json, r#"{"company_name":"Acme"}"#);

        let parsed: FormData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, form);
    }
}
