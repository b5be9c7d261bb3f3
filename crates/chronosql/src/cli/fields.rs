//! Fields command implementation

use super::output;
use anyhow::Result;
use crate::{EnrollmentFamily, EventFamily, OutputType, QueryFamily, TimeField};
use colored::*;
use serde_json::json;
use std::path::PathBuf;

/// Configuration for fields command
pub struct FieldsConfig {
    pub family: Option<String>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

const OUTPUT_TYPES: [OutputType; 3] = [
    OutputType::Event,
    OutputType::Enrollment,
    OutputType::TrackedEntity,
];

/// List time fields and the columns they select
pub fn fields(config: FieldsConfig) -> Result<()> {
    let family: Option<Box<dyn QueryFamily>> = match config.family.as_deref() {
        None => None,
        Some(name) => match name.to_lowercase().as_str() {
            "event" => Some(Box::new(EventFamily)),
            "enrollment" => Some(Box::new(EnrollmentFamily)),
            other => {
                anyhow::bail!(
                    "Unknown query family: {}. Use 'event' or 'enrollment'",
                    other
                );
            }
        },
    };

    let format = config
        .output_format
        .as_deref()
        .map(output::OutputFormat::from_str)
        .unwrap_or(output::OutputFormat::Text);

    let content = match format {
        output::OutputFormat::Text => text_listing(family.as_deref()),
        output::OutputFormat::Json | output::OutputFormat::JsonPretty => {
            let value = json_listing(family.as_deref(), config.family.as_deref());
            output::format_json(&value, format == output::OutputFormat::JsonPretty)?
        }
    };

    output::write_output(&content, config.output_file.as_deref())
}

/// Plain listing: one line per field, plus the family's default columns
/// when a family is selected
fn text_listing(family: Option<&dyn QueryFamily>) -> String {
    let mut lines = Vec::new();

    let listed: Vec<TimeField> = match family {
        Some(family) => family.allowed_time_fields().to_vec(),
        None => TimeField::ALL.to_vec(),
    };

    for field in &listed {
        // Pad before colorizing so escape codes do not skew the columns
        let name = format!("{:<17}", field.name());
        lines.push(format!("{} {}", name.cyan(), field.column()));
    }

    if let Some(family) = family {
        lines.push(String::new());
        lines.push("Default columns:".to_string());
        for output_type in OUTPUT_TYPES {
            let name = format!("{:<17}", output_type.to_string());
            lines.push(format!("{} {}", name.cyan(), family.default_column(output_type)));
        }
    }

    lines.join("\n")
}

/// JSON listing with per-field allowance and per-output-type defaults
fn json_listing(family: Option<&dyn QueryFamily>, family_name: Option<&str>) -> serde_json::Value {
    match family {
        Some(family) => {
            let fields: Vec<_> = family
                .allowed_time_fields()
                .iter()
                .map(|field| json!({ "name": field.name(), "column": field.column() }))
                .collect();
            let defaults: serde_json::Map<String, serde_json::Value> = OUTPUT_TYPES
                .iter()
                .map(|output_type| {
                    (
                        output_type.to_string(),
                        json!(family.default_column(*output_type)),
                    )
                })
                .collect();
            json!({
                "family": family_name.unwrap_or_default().to_lowercase(),
                "fields": fields,
                "defaults": defaults,
            })
        }
        None => {
            let fields: Vec<_> = TimeField::ALL
                .iter()
                .map(|field| {
                    let mut families = Vec::new();
                    if EventFamily.allowed_time_fields().contains(field) {
                        families.push("event");
                    }
                    if EnrollmentFamily.allowed_time_fields().contains(field) {
                        families.push("enrollment");
                    }
                    json!({
                        "name": field.name(),
                        "column": field.column(),
                        "families": families,
                    })
                })
                .collect();
            json!({ "fields": fields })
        }
    }
}
