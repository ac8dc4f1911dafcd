//! Directive Set
//!
//! Ordered collection of directives, at most one per (case-insensitive)
//! name.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::directive::Directive;
use crate::DirectiveError;

/// Ordered directive set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: Vec<Directive>,
}

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.entries.iter()
    }

    /// Get directive by case-insensitive name
    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.entries.iter().find(|d| d.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append without validation; the parser has already checked `directive`
    pub(crate) fn push(&mut self, directive: Directive) {
        self.entries.push(directive);
    }

    /// Add a directive, or merge its values into the existing one
    ///
    /// The directive is validated first and the set is left untouched on
    /// error. Merged values are deduplicated and sorted; a new directive is
    /// appended with its values sorted. Existing entries keep their position.
    pub fn merge_insert(&mut self, mut directive: Directive) -> Result<(), DirectiveError> {
        directive.validate()?;

        match self.entries.iter_mut().find(|d| d.is_named(&directive.name)) {
            Some(existing) => {
                let merged: BTreeSet<String> = existing
                    .values
                    .drain(..)
                    .chain(directive.values)
                    .collect();
                existing.values = merged.into_iter().collect();
                tracing::debug!(directive = %existing.name, values = existing.values.len(), "merged CSP directive");
            }
            None => {
                directive.values.sort();
                tracing::debug!(directive = %directive.name, "added CSP directive");
                self.entries.push(directive);
            }
        }

        Ok(())
    }

    /// Remove the directive with a case-insensitive matching name, if any
    pub fn remove_by_name(&mut self, name: &str) {
        self.entries.retain(|d| !d.is_named(name));
    }

    /// Serialize back to a policy string
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(Directive::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Directives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Directives {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl<'a> IntoIterator for &'a Directives {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Directives {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
