//! Policy
//!
//! A directive set paired with its disposition.

use std::fmt;
use std::str::FromStr;

use crate::directives::Directives;
use crate::parser::Parser;
use crate::DirectiveError;

/// Header carrying an enforced policy
pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Header carrying a report-only policy
pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: &str = "Content-Security-Policy-Report-Only";

/// Whether violations are blocked or only reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disposition {
    #[default]
    Enforce,
    ReportOnly,
}

impl Disposition {
    /// Header name this disposition is transmitted under
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::Enforce => CONTENT_SECURITY_POLICY,
            Self::ReportOnly => CONTENT_SECURITY_POLICY_REPORT_ONLY,
        }
    }

    /// Disposition for a response header name (case-insensitive)
    pub fn from_header_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(CONTENT_SECURITY_POLICY) {
            Some(Self::Enforce)
        } else if name.eq_ignore_ascii_case(CONTENT_SECURITY_POLICY_REPORT_ONLY) {
            Some(Self::ReportOnly)
        } else {
            None
        }
    }

    /// Value used in violation reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enforce => "enforce",
            Self::ReportOnly => "report",
        }
    }
}

impl FromStr for Disposition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enforce" => Ok(Self::Enforce),
            "report" | "report-only" => Ok(Self::ReportOnly),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content Security Policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    pub disposition: Disposition,
    pub directives: Directives,
}

impl Policy {
    pub fn new(disposition: Disposition, directives: Directives) -> Self {
        Self { disposition, directives }
    }

    /// Parse a serialized policy with the given disposition
    pub fn parse(disposition: Disposition, serialized: &str) -> Result<Self, DirectiveError> {
        Self::parse_with(&Parser::default(), disposition, serialized)
    }

    pub fn parse_with(
        parser: &Parser,
        disposition: Disposition,
        serialized: &str,
    ) -> Result<Self, DirectiveError> {
        Ok(Self::new(disposition, parser.parse(serialized)?))
    }

    /// Parse a response header, `None` if it is not a CSP header
    pub fn from_header(name: &str, value: &str) -> Option<Result<Self, DirectiveError>> {
        Disposition::from_header_name(name).map(|disposition| Self::parse(disposition, value))
    }

    pub fn is_report_only(&self) -> bool {
        self.disposition == Disposition::ReportOnly
    }

    pub fn header_name(&self) -> &'static str {
        self.disposition.header_name()
    }

    pub fn header_value(&self) -> String {
        self.directives.serialize()
    }

    /// `(name, value)` pair ready for an HTTP header map
    pub fn to_header(&self) -> (&'static str, String) {
        (self.header_name(), self.header_value())
    }
}
