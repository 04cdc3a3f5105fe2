//! Field registry: which fields each document type requires.
//!
//! "Required" here only drives completion scoring. Rendering always
//! succeeds, substituting placeholders for anything missing.
use crate::document::DocumentType;
use crate::form::fields;

/// Ordered required-field list for a document type.
pub fn required_fields(doc: DocumentType) -> &'static [&'static str] {
    match doc {
        DocumentType::Privacy => &[
            fields::COMPANY_NAME,
            fields::PRODUCT_DESCRIPTION,
            fields::CONTACT_EMAIL,
            fields::COOKIE_LEVEL,
            fields::JURISDICTION,
            fields::SERVICES_USED,
        ],
        DocumentType::Terms => &[
            fields::COMPANY_NAME,
            fields::PRODUCT_DESCRIPTION,
            fields::CONTACT_EMAIL,
            fields::COUNTRY,
        ],
        DocumentType::About => &[
            fields::COMPANY_NAME,
            fields::PRODUCT_DESCRIPTION,
            fields::COMPANY_LEAD,
        ],
        DocumentType::Support => &[fields::COMPANY_NAME, fields::CONTACT_EMAIL],
    }
}
