//! fOS CSP
//!
//! Content Security Policy header handling for the fOS browser engine.
//!
//! Features:
//! - Strict parsing of serialized policies into an ordered directive set
//! - Directive name vocabulary (active, deprecated, removed)
//! - Editing (merge-insert, remove) and re-serialization
//! - Enforce / report-only dispositions and their header names
//! - Decoding of `csp-report` violation payloads
//!
//! # Example
//!
//! ```
//! use fos_csp::{Directive, Directives};
//!
//! let mut directives: Directives = "default-src 'self'; object-src 'none'".parse()?;
//! directives.merge_insert(Directive::new("script-src", ["'self'", "https://cdn.example.com"]))?;
//! directives.remove_by_name("object-src");
//!
//! assert_eq!(
//!     directives.serialize(),
//!     "default-src 'self'; script-src 'self' https://cdn.example.com"
//! );
//! # Ok::<(), fos_csp::DirectiveError>(())
//! ```

pub mod chars;
pub mod names;
pub mod directive;
pub mod directives;
pub mod parser;
pub mod policy;
pub mod report;
pub mod config;

pub use chars::{is_valid_value, is_valid_value_char};
pub use names::{validate_name, name_status, NameStatus};
pub use directive::Directive;
pub use directives::Directives;
pub use parser::{parse, Parser};
pub use policy::{
    Disposition, Policy, CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY_REPORT_ONLY,
};
pub use report::{parse_report, parse_report_bytes, parse_report_str, Report};
pub use config::{DuplicatePolicy, ParserConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coarse classification of a [`DirectiveError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownDirectiveName,
    RemovedDirectiveName,
    DuplicateDirective,
    CommaInValue,
    InvalidValueCharacter,
    EmptyValue,
}

/// Error raised while parsing or validating directives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    #[error("unknown directive name: directive name '{0}' is unknown")]
    UnknownName(String),

    #[error("deprecated directive name: {reason}")]
    RemovedName { name: String, reason: String },

    #[error("duplicate directive: directive '{0}' is a duplicate")]
    Duplicate(String),

    #[error("directive value contains comma: '{0}'")]
    CommaInValue(String),

    #[error("invalid characters in value: '{0}'")]
    InvalidValueCharacter(String),

    #[error("empty value in directive '{0}'")]
    EmptyValue(String),
}

impl DirectiveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownName(_) => ErrorKind::UnknownDirectiveName,
            Self::RemovedName { .. } => ErrorKind::RemovedDirectiveName,
            Self::Duplicate(_) => ErrorKind::DuplicateDirective,
            Self::CommaInValue(_) => ErrorKind::CommaInValue,
            Self::InvalidValueCharacter(_) => ErrorKind::InvalidValueCharacter,
            Self::EmptyValue(_) => ErrorKind::EmptyValue,
        }
    }

    /// The directive name or value token the error was raised for
    ///
    /// For [`DirectiveError::EmptyValue`] this is the directive name.
    pub fn subject(&self) -> &str {
        match self {
            Self::UnknownName(s)
            | Self::Duplicate(s)
            | Self::CommaInValue(s)
            | Self::InvalidValueCharacter(s)
            | Self::EmptyValue(s) => s,
            Self::RemovedName { name, .. } => name,
        }
    }
}

/// Error raised while decoding a violation report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("json report malformed: missing 'csp-report' object")]
    Malformed,

    #[error("invalid report json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any error produced by this crate
#[derive(Debug, thiserror::Error)]
pub enum CspError {
    #[error(transparent)]
    Directive(#[from] DirectiveError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
