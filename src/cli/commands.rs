//! Command execution

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::infrastructure::di::ServiceContainer;

/// Export the topology file named on the command line.
#[instrument(skip(container))]
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let (input, output_path) = cli.paths()?;
    let format = container.settings.format.resolve(output_path);
    debug!("format: {} ({:?} setting)", format, container.settings.format);

    let report = container
        .export_service
        .export(input, output_path, format)?;

    output::success(&format!(
        "{} tree was saved successfully in {}",
        report.format,
        output_path.display()
    ));
    output::detail(&format!(
        "{} roots, {} configuration items",
        report.roots, report.items
    ));
    Ok(())
}
