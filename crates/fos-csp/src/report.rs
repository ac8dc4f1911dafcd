//! Violation Reports
//!
//! Decoding of `report-uri` style JSON payloads:
//!
//! ```json
//! {"csp-report": {"blocked-uri": "http://evil.com", "status-code": 200}}
//! ```
//!
//! Field values are not validated; missing fields take their defaults.
//! Only the first JSON value is read, anything after it is ignored.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Deserializer;

use crate::ReportError;

/// CSP violation report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Report {
    pub blocked_uri: String,
    pub document_uri: String,
    pub disposition: String,
    pub referrer: String,
    pub status_code: i64,
    pub original_policy: String,
    pub violated_directive: String,
    pub effective_directive: String,
    pub script_sample: String,
    pub source_file: String,
    pub line_number: i64,
    pub column_number: i64,
}

#[derive(Deserialize)]
struct ReportEnvelope {
    #[serde(rename = "csp-report", default)]
    report: Option<Report>,
}

impl ReportEnvelope {
    fn into_report(self) -> Result<Report, ReportError> {
        self.report.ok_or(ReportError::Malformed)
    }
}

fn decode<'de, R: serde_json::de::Read<'de>>(
    mut de: Deserializer<R>,
) -> Result<Report, ReportError> {
    // No `de.end()`: trailing data after the envelope is not an error.
    let envelope = ReportEnvelope::deserialize(&mut de)?;
    envelope.into_report()
}

/// Decode a report from a reader
pub fn parse_report<R: Read>(body: R) -> Result<Report, ReportError> {
    decode(Deserializer::from_reader(body))
}

pub fn parse_report_bytes(body: &[u8]) -> Result<Report, ReportError> {
    decode(Deserializer::from_slice(body))
}

pub fn parse_report_str(body: &str) -> Result<Report, ReportError> {
    decode(Deserializer::from_str(body))
}
