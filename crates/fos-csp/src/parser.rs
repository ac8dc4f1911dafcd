//! Directive Parser
//!
//! Turns a serialized policy into an ordered [`Directives`] set.
//!
//! Parsing is all-or-nothing: the first invalid name, duplicate or value
//! token aborts the parse and no directives are returned.

use crate::config::{DuplicatePolicy, ParserConfig};
use crate::directive::{validate_value, Directive};
use crate::directives::Directives;
use crate::names::{validate_name, NameStatus};
use crate::DirectiveError;

// ASCII whitespace plus VT (0x0B).
fn is_ws(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}

/// Parse a serialized policy with the default (strict) configuration
pub fn parse(serialized: &str) -> Result<Directives, DirectiveError> {
    Parser::default().parse(serialized)
}

/// Policy parser
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a serialized policy
    pub fn parse(&self, serialized: &str) -> Result<Directives, DirectiveError> {
        let mut directives = Directives::new();

        // Semicolons can never end up inside a name or value.
        for token in serialized.split(';') {
            let token = token.trim_matches(is_ws);
            if token.is_empty() {
                continue;
            }

            let (name, rest) = token.split_once(is_ws).unwrap_or((token, ""));
            if name.is_empty() {
                continue;
            }

            match validate_name(name) {
                Ok(NameStatus::Deprecated) => {
                    tracing::warn!(directive = name, "deprecated CSP directive");
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(%err, "rejecting policy");
                    return Err(err);
                }
            }

            if directives.contains(name) {
                match self.config.duplicates {
                    DuplicatePolicy::Reject => {
                        tracing::debug!(directive = name, "duplicate CSP directive");
                        return Err(DirectiveError::Duplicate(name.to_string()));
                    }
                    DuplicatePolicy::IgnoreLater => {
                        tracing::warn!(directive = name, "ignoring duplicate CSP directive");
                        continue;
                    }
                }
            }

            let values = rest
                .split(is_ws)
                .filter(|v| !v.is_empty())
                .map(|v| validate_value(v).map(|()| v.to_string()))
                .collect::<Result<Vec<_>, _>>()?;

            tracing::debug!(directive = name, values = values.len(), "parsed CSP directive");
            directives.push(Directive { name: name.to_string(), values });
        }

        Ok(directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn names(d: &Directives) -> Vec<&str> {
        d.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let d = parse("  default-src  'self'  ;  script-src 'self' https://; connect-src ; object-src 'self';base-uri 'none';  ").unwrap();

        assert_eq!(names(&d), ["default-src", "script-src", "connect-src", "object-src", "base-uri"]);
        assert_eq!(d.get("script-src").unwrap().values, ["'self'", "https://"]);
        assert!(d.get("connect-src").unwrap().values.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" ; ;;\t; ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_name_case() {
        let d = parse("Default-Src 'self'").unwrap();
        assert_eq!(names(&d), ["Default-Src"]);
        assert!(d.contains("default-src"));
    }

    #[test]
    fn test_parse_tab_separated() {
        let d = parse("script-src\t'self'\thttps://cdn.example.com").unwrap();
        assert_eq!(d.get("script-src").unwrap().values, ["'self'", "https://cdn.example.com"]);
    }

    #[test]
    fn test_parse_vertical_tab() {
        let d = parse("\u{0B}object-src\u{0B}'self'\u{0B}; img-src *").unwrap();
        assert_eq!(d.get("object-src").unwrap().values, ["'self'"]);
        assert_eq!(d.serialize(), "object-src 'self'; img-src *");
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = parse("object-src 'self'; Object-src 'none'").unwrap_err();
        assert_eq!(err, DirectiveError::Duplicate("Object-src".into()));
    }

    #[test]
    fn test_duplicate_ignored() {
        let parser = Parser::new(ParserConfig::lenient());
        let d = parser.parse("object-src 'self'; Object-src 'none'; img-src *").unwrap();

        assert_eq!(names(&d), ["object-src", "img-src"]);
        assert_eq!(d.get("object-src").unwrap().values, ["'self'"]);
    }

    #[test]
    fn test_name_errors() {
        assert_eq!(parse("bogus 'self'").unwrap_err().kind(), ErrorKind::UnknownDirectiveName);
        assert_eq!(
            parse("default-src 'self'; policy-uri /csp.xml").unwrap_err().kind(),
            ErrorKind::RemovedDirectiveName
        );
    }

    #[test]
    fn test_value_errors() {
        let err = parse("style-src 'self', 'unsafe-inline'").unwrap_err();
        assert_eq!(err, DirectiveError::CommaInValue("'self',".into()));

        let err = parse("object-src 'se\x00lf'").unwrap_err();
        assert_eq!(err, DirectiveError::InvalidValueCharacter("'se\x00lf'".into()));
    }

    #[test]
    fn test_deprecated_accepted() {
        let d = parse("referrer no-referrer; reflected-xss block").unwrap();
        assert_eq!(d.len(), 2);
    }
}
