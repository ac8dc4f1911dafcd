//! Directive
//!
//! A single named policy rule and its value tokens.

use std::fmt;

use crate::chars::is_valid_value;
use crate::names::validate_name;
use crate::DirectiveError;

/// CSP directive
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
    pub name: String,
    pub values: Vec<String>,
}

impl Directive {
    pub fn new<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Directive without values, e.g. `upgrade-insecure-requests`
    pub fn bare(name: &str) -> Self {
        Self { name: name.to_string(), values: Vec::new() }
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Check name and every value
    pub fn validate(&self) -> Result<(), DirectiveError> {
        validate_name(&self.name)?;
        self.values.iter().try_for_each(|v| {
            if v.is_empty() {
                return Err(DirectiveError::EmptyValue(self.name.clone()));
            }
            // Whitespace would split the token when the policy is parsed again.
            if v.contains(|c: char| c.is_ascii_whitespace() || c == '\u{0B}') {
                return Err(DirectiveError::InvalidValueCharacter(v.clone()));
            }
            validate_value(v)
        })
    }
}

/// Check a single value token
pub(crate) fn validate_value(token: &str) -> Result<(), DirectiveError> {
    if token.contains(',') {
        return Err(DirectiveError::CommaInValue(token.to_string()));
    }
    if !is_valid_value(token) {
        return Err(DirectiveError::InvalidValueCharacter(token.to_string()));
    }
    Ok(())
}

impl fmt::Display for Directive {
    // A directive without values still carries the separating space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.values.join(" "))
    }
}
