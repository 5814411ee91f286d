//! Check command: builds every filter of a definition file and reports problems.

use std::path::Path;

use filter_core::{
    DynFilterConfig, FilterDocument, FilterError, FilterFactory, FilterKind, FilterList,
};
use log::debug;
use serde::Serialize;

use crate::errors::CliError;
use crate::files::load_document;
use crate::ui::{self, OutputFormat};

/// Summary of one successfully built filter.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub name: String,
    pub form_name: String,
    pub kind: String,
    pub field_type: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub missing_options: Vec<String>,
}

/// Result of checking a whole definition document.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub filters: Vec<FilterReport>,
    pub errors: Vec<String>,
}

/// Check a definition file and print the report.
pub fn check(file: &Path, output_format: OutputFormat) -> Result<(), CliError> {
    let document = load_document(file)?;
    let report = check_document(&FilterFactory::with_builtin_kinds(), &document);

    match output_format {
        OutputFormat::Pretty => print_report(&report),
        OutputFormat::Json => ui::json_output(&report),
    }

    if report.errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::BuildError)
    }
}

/// Build each definition on its own so every problem gets reported.
pub fn check_document(factory: &FilterFactory, document: &FilterDocument) -> CheckReport {
    let mut report = CheckReport::default();
    let mut list = FilterList::new();

    for definition in &document.filters {
        let filter = match definition.build(factory) {
            Ok(filter) => filter,
            Err(e) => {
                report.errors.push(format!("{}: {}", definition.name, e));
                continue;
            }
        };

        let filter_report = report_filter(&filter);
        match list.add(filter) {
            Ok(()) => report.filters.push(filter_report),
            Err(e) => report.errors.push(e.to_string()),
        }
    }

    debug!(
        "Checked {} filters with {} errors",
        report.filters.len(),
        report.errors.len()
    );
    report
}

fn report_filter(filter: &DynFilterConfig) -> FilterReport {
    let missing_options = required_options(filter)
        .into_iter()
        .filter_map(|result| match result {
            Err(FilterError::MissingRequiredOption { option, .. }) => Some(option),
            _ => None,
        })
        .collect();

    FilterReport {
        name: filter.name().unwrap_or_default().to_string(),
        form_name: filter.form_name(),
        kind: filter.kind().name().to_string(),
        field_type: filter.field_type().to_string(),
        active: filter.is_active(),
        condition: filter.condition().map(|condition| condition.to_string()),
        missing_options,
    }
}

/// The required option lookups that apply to this filter's kind
fn required_options(filter: &DynFilterConfig) -> Vec<Result<(), FilterError>> {
    let mut checks = vec![filter.field_name().map(|_| ())];
    if filter.kind().name() == "model" {
        checks.push(filter.association_mapping().map(|_| ()));
    }
    checks
}

fn print_report(report: &CheckReport) {
    ui::header("Checking filter definitions");

    for filter in &report.filters {
        let state = if filter.active { "active" } else { "inactive" };
        println!(
            "{} ({}) form={} type={} {}",
            filter.name, filter.kind, filter.form_name, filter.field_type, state
        );

        for option in &filter.missing_options {
            ui::warning(&format!(
                "The option `{}` must be set for field: `{}`",
                option, filter.name
            ));
        }
    }

    for error in &report.errors {
        ui::error(error);
    }

    if report.errors.is_empty() {
        ui::success(&format!("Built {} filter(s)", report.filters.len()));
    } else {
        ui::error(&format!("\nFound {} error(s)", report.errors.len()));
    }
}
