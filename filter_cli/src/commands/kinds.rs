use filter_core::FilterFactory;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists the filter kinds the factory can create.
pub fn list_kinds(output_format: OutputFormat) -> Result<(), CliError> {
    let factory = FilterFactory::with_builtin_kinds();
    let kinds = factory.kinds();

    match output_format {
        OutputFormat::Pretty => {
            ui::header("Registered filter kinds");
            for kind in kinds {
                println!("{}", kind);
            }
        }
        OutputFormat::Json => ui::json_output(&kinds),
    }
    Ok(())
}
