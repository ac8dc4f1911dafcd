//! Directive Names
//!
//! The CSP directive vocabulary. Lookups are ASCII case-insensitive.

use crate::DirectiveError;

pub const CHILD_SRC: &str = "child-src";
pub const CONNECT_SRC: &str = "connect-src";
pub const DEFAULT_SRC: &str = "default-src";
pub const FONT_SRC: &str = "font-src";
pub const FRAME_SRC: &str = "frame-src";
pub const IMG_SRC: &str = "img-src";
pub const MANIFEST_SRC: &str = "manifest-src";
pub const MEDIA_SRC: &str = "media-src";
pub const PREFETCH_SRC: &str = "prefetch-src";
pub const OBJECT_SRC: &str = "object-src";
pub const SCRIPT_SRC: &str = "script-src";
pub const SCRIPT_SRC_ELEM: &str = "script-src-elem";
pub const SCRIPT_SRC_ATTR: &str = "script-src-attr";
pub const STYLE_SRC: &str = "style-src";
pub const STYLE_SRC_ELEM: &str = "style-src-elem";
pub const STYLE_SRC_ATTR: &str = "style-src-attr";
pub const WORKER_SRC: &str = "worker-src";
pub const BASE_URI: &str = "base-uri";
pub const PLUGIN_TYPES: &str = "plugin-types";
pub const SANDBOX: &str = "sandbox";
pub const DISOWN_OPENER: &str = "disown-opener";
pub const FORM_ACTION: &str = "form-action";
pub const FRAME_ANCESTORS: &str = "frame-ancestors";
pub const NAVIGATE_TO: &str = "navigate-to";
pub const REPORT_URI: &str = "report-uri";
pub const REPORT_TO: &str = "report-to";
pub const UPGRADE_INSECURE: &str = "upgrade-insecure-requests";
pub const BLOCK_ALL_MIXED: &str = "block-all-mixed-content";
pub const REQUIRE_SRI_FOR: &str = "require-sri-for";
pub const REFLECTED_XSS: &str = "reflected-xss";
pub const REFERRER: &str = "referrer";
pub const POLICY_URI: &str = "policy-uri";

/// CSP source keywords
pub const SELF: &str = "'self'";
pub const NONE: &str = "'none'";
pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
pub const UNSAFE_EVAL: &str = "'unsafe-eval'";
pub const STRICT_DYNAMIC: &str = "'strict-dynamic'";
pub const UNSAFE_HASHES: &str = "'unsafe-hashes'";

/// Fetch, document, navigation and reporting directives
pub static ACCEPTED_DIRECTIVES: &[&str] = &[
    CHILD_SRC,
    CONNECT_SRC,
    DEFAULT_SRC,
    FONT_SRC,
    FRAME_SRC,
    IMG_SRC,
    MANIFEST_SRC,
    MEDIA_SRC,
    PREFETCH_SRC,
    OBJECT_SRC,
    SCRIPT_SRC,
    SCRIPT_SRC_ELEM,
    SCRIPT_SRC_ATTR,
    STYLE_SRC,
    STYLE_SRC_ELEM,
    STYLE_SRC_ATTR,
    WORKER_SRC,
    BASE_URI,
    PLUGIN_TYPES,
    SANDBOX,
    DISOWN_OPENER,
    FORM_ACTION,
    FRAME_ANCESTORS,
    NAVIGATE_TO,
    REPORT_URI,
    REPORT_TO,
    UPGRADE_INSECURE,
    BLOCK_ALL_MIXED,
    REQUIRE_SRI_FOR,
];

/// Still parseable, but no longer part of CSP
pub static DEPRECATED_DIRECTIVES: &[&str] = &[
    REFLECTED_XSS, // CSP 2
    REFERRER,      // superseded by the Referrer-Policy header
];

/// Formally removed; rejected with a specific message
pub static REMOVED_DIRECTIVES: &[(&str, &str)] = &[
    (POLICY_URI, "policy-uri has been removed and is not supported"),
];

/// Status of a recognized directive name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStatus {
    Active,
    Deprecated,
    Removed,
}

fn lookup<'a>(table: &'a [&'a str], name: &str) -> Option<&'a str> {
    table.iter().copied().find(|n| n.eq_ignore_ascii_case(name))
}

/// Classify a directive name, `None` if it is unknown
pub fn name_status(name: &str) -> Option<NameStatus> {
    if lookup(ACCEPTED_DIRECTIVES, name).is_some() {
        Some(NameStatus::Active)
    } else if lookup(DEPRECATED_DIRECTIVES, name).is_some() {
        Some(NameStatus::Deprecated)
    } else if REMOVED_DIRECTIVES.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)) {
        Some(NameStatus::Removed)
    } else {
        None
    }
}

/// Validate a directive name
///
/// Returns the status of an accepted name (active or deprecated). Removed
/// names fail with [`DirectiveError::RemovedName`], anything else with
/// [`DirectiveError::UnknownName`].
pub fn validate_name(name: &str) -> Result<NameStatus, DirectiveError> {
    if let Some((_, reason)) = REMOVED_DIRECTIVES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
    {
        return Err(DirectiveError::RemovedName {
            name: name.to_string(),
            reason: reason.to_string(),
        });
    }

    name_status(name).ok_or_else(|| DirectiveError::UnknownName(name.to_string()))
}
