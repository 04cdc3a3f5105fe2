//! Completion scoring over the field registry.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::document::DocumentType;
use crate::form::FormData;
use crate::registry::required_fields;

/// Completion score for one document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Rounded percentage, 0..=100.
    pub percentage: u8,
    /// Required fields with a trimmed, non-empty value.
    pub completed: usize,
    /// Total required fields.
    pub total: usize,
    /// Required fields still missing, in registry order.
    pub missing: Vec<String>,
}

impl CompletionReport {
    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }
}

/// Score a form against a document type's required fields.
///
/// A field counts as completed iff its trimmed value is non-empty. An empty
/// required-field list scores 100 (vacuously complete); this avoids a divide
/// by zero and is the documented edge-case policy. Pure function, recomputed
/// per call, never cached.
pub fn completion(form: &FormData, doc: DocumentType) -> CompletionReport {
    let required = required_fields(doc);
    let total = required.len();

    let mut completed = 0;
    let mut missing = Vec::new();
    for field in required {
        if form.is_completed(field) {
            completed += 1;
        } else {
            missing.push((*field).to_string());
        }
    }

    let percentage = if total == 0 {
        100
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    CompletionReport {
        percentage,
        completed,
        total,
        missing,
    }
}

/// Completion for all four document types at once.
pub fn completion_map(form: &FormData) -> HashMap<DocumentType, CompletionReport> {
    DocumentType::ALL
        .into_iter()
        .map(|doc| (doc, completion(form, doc)))
        .collect()
}
