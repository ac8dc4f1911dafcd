//! Example: validate and normalize a CSP header value
//!
//! ```text
//! cargo run -p fos-csp --example check_policy -- [--report-only] [--lenient] "<policy>"
//! RUST_LOG=fos_csp=debug cargo run -p fos-csp --example check_policy -- "default-src 'self'"
//! ```

use fos_csp::{Disposition, Parser, ParserConfig, Policy};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut disposition = Disposition::Enforce;
    let mut config = ParserConfig::default();
    let mut raw = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--report-only" => disposition = Disposition::ReportOnly,
            "--lenient" => config = ParserConfig::lenient(),
            _ => raw = Some(arg),
        }
    }

    let Some(raw) = raw else {
        eprintln!("usage: check_policy [--report-only] [--lenient] <policy>");
        std::process::exit(2);
    };

    match Policy::parse_with(&Parser::new(config), disposition, &raw) {
        Ok(policy) => {
            let (name, value) = policy.to_header();
            println!("{name}: {value}");
        }
        Err(err) => {
            tracing::error!(kind = ?err.kind(), subject = err.subject(), "invalid policy");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
