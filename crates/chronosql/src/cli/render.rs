//! Render command implementation

use super::output;
use anyhow::{Context, Result};
use crate::{enrollment_renderer, event_renderer, TimeQuery};
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for render command
pub struct RenderConfig {
    pub file: PathBuf,
    pub family: String,
    pub show_query: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Render the temporal predicate of a query file
pub fn render(config: RenderConfig) -> Result<()> {
    let query = load_query(&config.file)?;

    if config.show_query {
        let echo = serde_json::to_string_pretty(&query).context("Failed to serialize query")?;
        eprintln!("{}", echo);
    }

    let sql = render_for_family(&config.family, &query)?;

    let format = config
        .output_format
        .as_deref()
        .map(output::OutputFormat::from_str)
        .unwrap_or(output::OutputFormat::Text);

    let content = match format {
        output::OutputFormat::Text => sql,
        output::OutputFormat::Json | output::OutputFormat::JsonPretty => {
            let value = json!({
                "family": config.family.to_lowercase(),
                "mode": query_mode(&query),
                "sql": sql,
            });
            output::format_json(&value, format == output::OutputFormat::JsonPretty)?
        }
    };

    output::write_output(&content, config.output_file.as_deref())
}

/// Load a query from a JSON file, or from stdin when the path is `-`
pub(super) fn load_query(file: &Path) -> Result<TimeQuery> {
    let content = if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read query from stdin")?;
        buffer
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read query file: {}", file.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse query file: {}", file.display()))
}

/// Render with the family selected by name
pub(super) fn render_for_family(family: &str, query: &TimeQuery) -> Result<String> {
    match family.to_lowercase().as_str() {
        "event" => Ok(event_renderer().render(query)),
        "enrollment" => Ok(enrollment_renderer().render(query)),
        other => {
            anyhow::bail!(
                "Unknown query family: {}. Use 'event' or 'enrollment'",
                other
            );
        }
    }
}

/// The predicate mode that applies to a query, mirroring the renderer's
/// dispatch priority
pub(super) fn query_mode(query: &TimeQuery) -> &'static str {
    if query.has_non_default_boundaries() {
        "boundary"
    } else if query.has_start_end_date() || query.has_time_date_ranges() {
        "range"
    } else if query.has_periods() {
        "period"
    } else {
        "none"
    }
}
