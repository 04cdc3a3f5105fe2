//! Third-party-service catalog.
//!
//! Maps a service name to the data it collects, why it is used, and its
//! privacy-policy link. A user-listed service that is not in the table still
//! renders in the Privacy document as a generic clause; lookup failure is
//! never an error.
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceProfile {
    pub name: &'static str,
    pub data_collected: &'static str,
    pub purpose: &'static str,
    pub policy_url: &'static str,
}

const SERVICES: &[ServiceProfile] = &[
    ServiceProfile {
        name: "Stripe",
        data_collected: "payment card details, billing address and transaction history",
        purpose: "payment processing",
        policy_url: "https://stripe.com/privacy",
    },
    ServiceProfile {
        name: "Sentry",
        data_collected: "error reports, device and browser metadata, IP addresses",
        purpose: "error monitoring and diagnostics",
        policy_url: "https://sentry.io/privacy/",
    },
    ServiceProfile {
        name: "Google Analytics",
        data_collected: "usage statistics, device identifiers and approximate location",
        purpose: "product analytics",
        policy_url: "https://policies.google.com/privacy",
    },
    ServiceProfile {
        name: "Plausible",
        data_collected: "aggregated page views without personal identifiers",
        purpose: "privacy-friendly analytics",
        policy_url: "https://plausible.io/privacy",
    },
    ServiceProfile {
        name: "PostHog",
        data_collected: "product usage events and session recordings",
        purpose: "product analytics",
        policy_url: "https://posthog.com/privacy",
    },
    ServiceProfile {
        name: "Supabase",
        data_collected: "account credentials and application data you store",
        purpose: "database and authentication hosting",
        policy_url: "https://supabase.com/privacy",
    },
    ServiceProfile {
        name: "Vercel",
        data_collected: "request logs and IP addresses",
        purpose: "application hosting and delivery",
        policy_url: "https://vercel.com/legal/privacy-policy",
    },
    ServiceProfile {
        name: "AWS",
        data_collected: "infrastructure logs and stored application data",
        purpose: "cloud infrastructure",
        policy_url: "https://aws.amazon.com/privacy/",
    },
    ServiceProfile {
        name: "Cloudflare",
        data_collected: "network request metadata and IP addresses",
        purpose: "content delivery and attack protection",
        policy_url: "https://www.cloudflare.com/privacypolicy/",
    },
    ServiceProfile {
        name: "Mailchimp",
        data_collected: "email addresses and campaign engagement",
        purpose: "email marketing",
        policy_url: "https://www.intuit.com/privacy/statement/",
    },
    ServiceProfile {
        name: "Intercom",
        data_collected: "support conversations and contact details",
        purpose: "customer support chat",
        policy_url: "https://www.intercom.com/legal/privacy",
    },
    ServiceProfile {
        name: "OpenAI",
        data_collected: "prompts and generated content",
        purpose: "AI-assisted features",
        policy_url: "https://openai.com/policies/privacy-policy",
    },
];

static INDEX: Lazy<HashMap<String, &'static ServiceProfile>> = Lazy::new(|| {
    SERVICES
        .iter()
        .map(|profile| (profile.name.to_lowercase(), profile))
        .collect()
});

/// Case-insensitive catalog lookup.
pub fn lookup(name: &str) -> Option<&'static ServiceProfile> {
    INDEX.get(&name.trim().to_lowercase()).copied()
}

/// Every service the catalog knows about.
pub fn known_services() -> &'static [ServiceProfile] {
    SERVICES
}
