use std::path::Path;

use filter_core::{FilterFactory, FilterKind, FilterList, OptionBag, Value};
use serde::Serialize;

use crate::errors::CliError;
use crate::files::load_document;
use crate::ui::{self, OutputFormat};

/// Full view of one filter's configuration.
#[derive(Debug, Serialize)]
struct FilterDescription<'a> {
    name: &'a str,
    form_name: String,
    kind: &'a str,
    field_type: &'a str,
    label: Option<&'a str>,
    active: bool,
    condition: Option<String>,
    value: Option<&'a Value>,
    options: &'a OptionBag,
}

/// Describes one filter, looked up by name or form name.
pub fn describe(file: &Path, name: &str, output_format: OutputFormat) -> Result<(), CliError> {
    let document = load_document(file)?;
    let factory = FilterFactory::with_builtin_kinds();
    let list = FilterList::from_definitions(&factory, &document.filters).map_err(|e| {
        ui::error_with_details("Failed to build filters", &e.to_string());
        CliError::BuildError
    })?;

    let Some(filter) = list.get(name).or_else(|| list.get_by_form_name(name)) else {
        ui::error(&format!("No filter named '{}' in '{}'", name, file.display()));
        return Err(CliError::NotFound);
    };

    let description = FilterDescription {
        name: filter.name().unwrap_or_default(),
        form_name: filter.form_name(),
        kind: filter.kind().name(),
        field_type: filter.field_type(),
        label: filter.label(),
        active: filter.is_active(),
        condition: filter.condition().map(|condition| condition.to_string()),
        value: filter.value(),
        options: filter.options(),
    };

    match output_format {
        OutputFormat::Pretty => print_description(&description),
        OutputFormat::Json => ui::json_output(&description),
    }
    Ok(())
}

fn print_description(description: &FilterDescription) {
    ui::header(&format!("Filter '{}'", description.name));
    ui::field("kind", description.kind);
    ui::field("form name", &description.form_name);
    ui::field("field type", description.field_type);
    ui::field("label", description.label.unwrap_or("-"));
    ui::field("active", if description.active { "yes" } else { "no" });
    ui::field("condition", description.condition.as_deref().unwrap_or("-"));
    ui::field(
        "value",
        &description
            .value
            .map(Value::to_string)
            .unwrap_or_else(|| "-".to_string()),
    );

    for (key, value) in description.options {
        ui::field(key, &value.to_string());
    }
}
