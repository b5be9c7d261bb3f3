//! Validate command implementation

use super::{output, render};
use anyhow::Result;
use crate::{DateRange, EnrollmentFamily, EventFamily, QueryFamily, TimeField, TimeQuery};
use colored::*;
use std::path::PathBuf;

/// Configuration for validate command
pub struct ValidateConfig {
    pub files: Vec<PathBuf>,
    pub family: String,
    pub strict: bool,
    pub verbose: bool,
}

/// Validation result for a single file
struct ValidationResult {
    file: PathBuf,
    success: bool,
    mode: Option<&'static str>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Validate query files
pub fn validate(config: ValidateConfig) -> Result<()> {
    if config.files.is_empty() {
        anyhow::bail!("No files specified for validation");
    }

    let mut all_results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    // Validate each file
    for file in &config.files {
        let result = validate_file(file, &config)?;

        total_errors += result.errors.len();
        total_warnings += result.warnings.len();

        all_results.push(result);
    }

    // Print results
    for result in &all_results {
        print_validation_result(result);
    }

    // Print summary
    println!();
    if total_errors == 0 && total_warnings == 0 {
        println!(
            "{}",
            output::format_success(&format!(
                "All {} file(s) validated successfully",
                config.files.len()
            ))
        );
        Ok(())
    } else {
        let mut summary = Vec::new();

        if total_errors > 0 {
            summary.push(format!("{} error(s)", total_errors).red().to_string());
        }

        if total_warnings > 0 {
            summary.push(format!("{} warning(s)", total_warnings).yellow().to_string());
        }

        eprintln!(
            "{} Found {}",
            "Validation failed:".red().bold(),
            summary.join(", ")
        );

        if config.strict && total_warnings > 0 {
            eprintln!("{}", "Strict mode: treating warnings as errors".yellow());
            std::process::exit(1);
        }

        if total_errors > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Validate a single file
fn validate_file(file: &PathBuf, config: &ValidateConfig) -> Result<ValidationResult> {
    if config.verbose {
        eprintln!("Validating: {}", file.display());
    }

    let mut result = ValidationResult {
        file: file.clone(),
        success: true,
        mode: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    // Load and parse the query
    let query = match render::load_query(file) {
        Ok(query) => query,
        Err(e) => {
            result.success = false;
            result.errors.push(format!("{:#}", e));
            return Ok(result);
        }
    };

    let allowed: &[TimeField] = match config.family.to_lowercase().as_str() {
        "event" => EventFamily.allowed_time_fields(),
        "enrollment" => EnrollmentFamily.allowed_time_fields(),
        other => {
            result.success = false;
            result
                .errors
                .push(format!("Unknown query family: {}. Use 'event' or 'enrollment'", other));
            return Ok(result);
        }
    };

    check_query(&query, allowed, &config.family, &mut result.warnings);
    result.mode = Some(render::query_mode(&query));

    if config.verbose {
        for (field, ranges) in &query.time_date_ranges {
            let merged = DateRange::merge_if_continuous(ranges);
            if merged.len() < ranges.len() {
                eprintln!(
                    "  {}: {} ranges merge into one continuous window",
                    field,
                    ranges.len()
                );
            } else if ranges.len() > 1 {
                eprintln!(
                    "  {}: {} ranges, not continuous; rendered separately",
                    field,
                    ranges.len()
                );
            }
        }
    }

    Ok(result)
}

/// Collect warnings for query shapes that render, but not the way the
/// caller probably meant
fn check_query(query: &TimeQuery, allowed: &[TimeField], family: &str, warnings: &mut Vec<String>) {
    if let Some(name) = query.time_field.as_deref() {
        match TimeField::from_name(name) {
            None => warnings.push(format!(
                "Unknown time field {}; the default column will be used",
                name
            )),
            Some(field) if !allowed.contains(&field) => warnings.push(format!(
                "Time field {} is not allowed for {} queries; the default column will be used",
                name,
                family.to_lowercase()
            )),
            Some(_) => {}
        }
    }

    if query.start_date.is_some() != query.end_date.is_some() {
        warnings.push("Both start_date and end_date are required for a window; the incomplete pair is ignored".to_string());
    }

    if query.has_non_default_boundaries()
        && (query.has_start_end_date() || query.has_time_date_ranges() || query.has_periods())
    {
        warnings.push(
            "Boundary override takes precedence; date ranges and periods are ignored".to_string(),
        );
    } else if (query.has_start_end_date() || query.has_time_date_ranges()) && query.has_periods() {
        warnings.push("Periods are ignored when date ranges are present".to_string());
    }

    for (field, ranges) in &query.time_date_ranges {
        if ranges.is_empty() {
            warnings.push(format!("No date ranges given for time field {}", field));
        }
        for range in ranges {
            if range.end < range.start {
                warnings.push(format!(
                    "Date range {} for time field {} ends before it starts",
                    range, field
                ));
            }
        }
    }
}

/// Print validation result for a file
fn print_validation_result(result: &ValidationResult) {
    let status = if result.success {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };

    match result.mode {
        Some(mode) => println!(
            "{} {} ({})",
            status,
            result.file.display().to_string().cyan(),
            mode
        ),
        None => println!("{} {}", status, result.file.display().to_string().cyan()),
    }

    for error in &result.errors {
        println!("  {}: {}", "error".red().bold(), error);
    }

    for warning in &result.warnings {
        println!("  {}: {}", "warning".yellow().bold(), warning);
    }
}
