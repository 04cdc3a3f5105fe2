//! Jurisdiction rights catalog.
//!
//! Each supported jurisdiction code maps to a block of rights prose and the
//! regulator to name. Resolution never fails: absent or explicitly
//! out-of-scope codes omit the section, unknown codes yield a prompt asking
//! the user to pick one.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RightsBlock {
    pub heading: String,
    pub body: String,
    pub regulator: Option<String>,
}

/// Outcome of resolving a jurisdiction code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RightsResolution {
    /// A supported jurisdiction; render the block.
    Block(RightsBlock),
    /// Unknown code; render the "select your jurisdiction" prompt.
    Prompt,
    /// No code, or explicitly "rest of world"; omit the section.
    Omitted,
}

/// Resolve a jurisdiction code into rights prose.
///
/// `country` feeds the generic block, which names the user's country instead
/// of a specific statute.
pub fn resolve_rights(code: Option<&str>, country: Option<&str>) -> RightsResolution {
    let code = match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => c.to_lowercase(),
        None => return RightsResolution::Omitted,
    };

    let block = match code.as_str() {
        "rest" => return RightsResolution::Omitted,
        "eu" => RightsBlock {
            heading: "Your Rights under the GDPR".to_string(),
            body: "Under the General Data Protection Regulation you have the right to \
                   access, rectify and erase your personal data, to restrict or object \
                   to its processing, and to receive it in a portable format. You may \
                   withdraw any consent you have given at any time."
                .to_string(),
            regulator: Some("your national Data Protection Authority".to_string()),
        },
        "california" => RightsBlock {
            heading: "Your California Privacy Rights".to_string(),
            body: "Under the CCPA and CPRA, California residents have the right to know \
                   what personal information we collect, to request its deletion or \
                   correction, to opt out of its sale or sharing, and to not be \
                   discriminated against for exercising these rights."
                .to_string(),
            regulator: Some("California Privacy Protection Agency".to_string()),
        },
        "uk" => RightsBlock {
            heading: "Your Rights under the UK GDPR".to_string(),
            body: "Under the UK GDPR and the Data Protection Act 2018 you have the right \
                   to access, rectify and erase your personal data, to restrict or \
                   object to its processing, and to data portability. You may withdraw \
                   consent at any time."
                .to_string(),
            regulator: Some("Information Commissioner's Office (ICO)".to_string()),
        },
        "canada" => RightsBlock {
            heading: "Your Privacy Rights in Canada".to_string(),
            body: "Under PIPEDA you have the right to access the personal information we \
                   hold about you, to challenge its accuracy, and to withdraw consent to \
                   its collection, use or disclosure, subject to legal and contractual \
                   restrictions."
                .to_string(),
            regulator: Some("Office of the Privacy Commissioner of Canada".to_string()),
        },
        "australia" => RightsBlock {
            heading: "Your Privacy Rights in Australia".to_string(),
            body: "Under the Privacy Act 1988 and the Australian Privacy Principles you \
                   have the right to access and correct the personal information we hold \
                   about you and to complain about how it is handled."
                .to_string(),
            regulator: Some("Office of the Australian Information Commissioner".to_string()),
        },
        "brazil" => RightsBlock {
            heading: "Your Rights under the LGPD".to_string(),
            body: "Under the Lei Geral de Proteção de Dados you have the right to confirm \
                   that we process your data, to access, correct and delete it, to data \
                   portability, and to revoke consent at any time."
                .to_string(),
            regulator: Some("Autoridade Nacional de Proteção de Dados (ANPD)".to_string()),
        },
        "generic" => {
            let place = country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or("your country");
            RightsBlock {
                heading: "Your Rights".to_string(),
                body: format!(
                    "Privacy law in {place} may grant you rights to access, correct and \
                     delete the personal data we hold about you. Contact us to exercise \
                     any right available to you, and we will respond as local law \
                     requires."
                ),
                regulator: None,
            }
        }
        _ => return RightsResolution::Prompt,
    };

    RightsResolution::Block(block)
}
