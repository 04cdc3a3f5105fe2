//! Render-context assembly.
//!
//! All branching lives here, in plain Rust: placeholder resolution, service
//! expansion through the catalog, cookie tiers, jurisdiction rights, the
//! provenance footer. The templates themselves only interpolate and loop.
use chrono::NaiveDate;
use serde_json::{json, Value};

use launchkit_catalog::{jurisdictions, services};
use launchkit_core::{fields, input, FormData, KIT_VERSION};

use crate::DeriveOptions;

/// Cookie disclosure level, parsed leniently from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CookieLevel {
    None,
    Analytics,
    Marketing,
}

impl CookieLevel {
    /// "all" is the wizard's historical name for the marketing level; both
    /// spellings are accepted. Anything unrecognized falls back to the
    /// strictest level rather than erroring.
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("analytics") => CookieLevel::Analytics,
            Some("all") | Some("marketing") => CookieLevel::Marketing,
            _ => CookieLevel::None,
        }
    }
}

/// A field's value, or an italicized placeholder naming what is missing.
fn resolve(form: &FormData, field: &str, label: &str) -> String {
    match form.trimmed(field) {
        Some(value) => value.to_string(),
        None => format!("*[{label}]*"),
    }
}

/// The introduction: an AI-refined override when present, otherwise a
/// deterministic sentence from company name and product description.
fn intro(form: &FormData, opts: &DeriveOptions) -> String {
    if let Some(text) = opts
        .intro_override
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        return text.to_string();
    }

    let name = resolve(form, fields::COMPANY_NAME, "add your company name");
    let description = resolve(form, fields::PRODUCT_DESCRIPTION, "describe your product");
    format!("{} offers {}.", name, description.trim_end_matches('.'))
}

/// Cookie clauses are cumulative: every clause present at a lower level is
/// present at every higher level, so upgrading the level only ever adds text.
fn cookie_context(form: &FormData) -> Value {
    let level = CookieLevel::parse(form.trimmed(fields::COOKIE_LEVEL));

    let mut clauses = vec![
        "We set cookies that are strictly necessary for the product to function, such as \
         keeping you signed in."
            .to_string(),
    ];
    let mut tiers = vec![
        "Essential — required for core functionality; always active.".to_string(),
    ];

    if level >= CookieLevel::Analytics {
        clauses.push(
            "With your consent we also set analytics cookies to understand how the product \
             is used and where it can improve."
                .to_string(),
        );
        tiers.push("Analytics — help us understand product usage; set only with consent.".to_string());
    }
    if level >= CookieLevel::Marketing {
        clauses.push(
            "With your consent we additionally set marketing cookies to personalise offers \
             and measure campaigns."
                .to_string(),
        );
        tiers.push("Marketing — personalise offers and measure campaigns; set only with consent.".to_string());
    }

    json!({
        "level": match level {
            CookieLevel::None => "none",
            CookieLevel::Analytics => "analytics",
            CookieLevel::Marketing => "marketing",
        },
        "clauses": clauses,
        "tiers": tiers,
    })
}

/// Expand the user's service list through the catalog. The user's spelling is
/// kept verbatim for display; the catalog only supplies the blurb. Unknown
/// services get a generic clause, so every listed service appears in the
/// output.
fn service_context(form: &FormData) -> Vec<Value> {
    let raw = form.get(fields::SERVICES_USED).unwrap_or("");
    input::split_services(raw)
        .into_iter()
        .map(|name| match services::lookup(&name) {
            Some(profile) => json!({
                "name": name,
                "known": true,
                "data_collected": profile.data_collected,
                "purpose": profile.purpose,
                "policy_url": profile.policy_url,
            }),
            None => json!({ "name": name, "known": false }),
        })
        .collect()
}

/// Build the full render context for one document.
pub(crate) fn build(form: &FormData, opts: &DeriveOptions, render_date: NaiveDate) -> Value {
    let company_name = resolve(form, fields::COMPANY_NAME, "add your company name");
    let services = service_context(form);
    let has_services = !services.is_empty();

    let mut ctx = json!({
        "intro": intro(form, opts),
        "company_name": company_name,
        "product_description": resolve(form, fields::PRODUCT_DESCRIPTION, "describe your product"),
        "country": resolve(form, fields::COUNTRY, "add your country"),
        "contact_email": resolve(form, fields::CONTACT_EMAIL, "add a contact email"),
        "company_lead": resolve(form, fields::COMPANY_LEAD, "add your founder or lead"),
        "cookie": cookie_context(form),
        "services": services,
        "has_services": has_services,
        "services_placeholder": "*[list the third-party services you use, separated by commas]*",
        "rights_prompt": false,
        "footer": {
            "product": resolve(form, fields::COMPANY_NAME, "add your company name"),
            "version": KIT_VERSION,
            "date": render_date.format("%Y-%m-%d").to_string(),
        },
    });

    match jurisdictions::resolve_rights(
        form.trimmed(fields::JURISDICTION),
        form.trimmed(fields::COUNTRY),
    ) {
        jurisdictions::RightsResolution::Block(block) => {
            ctx["rights"] = json!({
                "heading": block.heading,
                "body": block.body,
                "regulator": block.regulator,
            });
        }
        jurisdictions::RightsResolution::Prompt => {
            ctx["rights_prompt"] = json!(true);
        }
        jurisdictions::RightsResolution::Omitted => {}
    }

    // Premium branch: competitive-intelligence copy only renders on the edge
    // tier, and only when the orchestrator produced differentiators.
    let differentiators: Vec<&str> = if opts.tier.is_edge() {
        opts.differentiators
            .iter()
            .map(String::as_str)
            .filter(|d| !d.trim().is_empty())
            .collect()
    } else {
        Vec::new()
    };
    ctx["has_differentiators"] = json!(!differentiators.is_empty());
    ctx["differentiators"] = json!(differentiators);

    ctx
}
