use std::time::Duration;

use quotedeck_core::UtcDateTime;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// JSON output wrapper: command payload plus request metadata.
///
/// Table mode prints the pre-rendered lines instead; the metadata is a
/// JSON-mode concern except for warnings, which both modes surface.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub data: Value,
    pub meta: Meta,
    #[serde(skip)]
    pub table: Vec<String>,
}

/// Request metadata attached to every JSON payload.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub request_id: String,
    pub generated_at: String,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Envelope {
    pub fn new(data: Value, table: Vec<String>, warnings: Vec<String>, elapsed: Duration) -> Self {
        Self {
            data,
            meta: Meta {
                request_id: Uuid::new_v4().hyphenated().to_string(),
                generated_at: UtcDateTime::now().format_rfc3339(),
                latency_ms: elapsed.as_millis() as u64,
                warnings,
            },
            table,
        }
    }
}

pub fn render(envelope: &Envelope, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope),
    }

    Ok(())
}

fn render_table(envelope: &Envelope) {
    for line in &envelope.table {
        println!("{line}");
    }

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }
}
