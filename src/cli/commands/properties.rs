//! Properties command - report every property, or a single one

use std::io::{self, IsTerminal};
use std::path::Path;

use log::debug;

use super::super::app::PropertiesArgs;
use propreport::adapters::{
    JsonRenderer, LogDiagnostics, PropertySet, TextRenderer, load_properties, parse_definitions,
};
use propreport::config::{GlobalConfig, ReportConfig};
use propreport::core::services::PropertyReportTask;
use propreport::output::OutputMode;

/// Display the properties report
pub fn properties(args: &PropertiesArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load().report;

    let (mut set, origin) = load_source(args.file.as_deref(), &config)?;
    set.merge(parse_definitions(&args.define)?);

    let title = args
        .title
        .clone()
        .or_else(|| config.title.clone())
        .unwrap_or_else(|| match origin {
            Some(path) => format!("Properties of '{}'", path.display()),
            None => "Properties".to_string(),
        });

    let task = PropertyReportTask::new(&set, args.property.clone());
    let mut diagnostics = LogDiagnostics::default();
    let stdout = io::stdout();

    match output_mode {
        OutputMode::Human => {
            let color = config.color && !args.no_color && stdout.is_terminal();
            let mut renderer = TextRenderer::new(stdout.lock())
                .with_title(title)
                .with_header(config.header && !args.no_header)
                .with_color(color);
            task.run(&mut renderer, &mut diagnostics)?;
        },
        OutputMode::Json => {
            let mut renderer = JsonRenderer::new(stdout.lock()).with_title(title);
            task.run(&mut renderer, &mut diagnostics)?;
        },
    }

    debug!("Property report done with {} warning(s)", diagnostics.emitted());
    Ok(())
}

/// Load the explicit file, or the configured default file when it exists
fn load_source<'a>(
    file: Option<&'a Path>,
    config: &'a ReportConfig,
) -> anyhow::Result<(PropertySet, Option<&'a Path>)> {
    if let Some(path) = file {
        return Ok((load_properties(path)?, Some(path)));
    }

    let default = config.default_file.as_path();
    if default.exists() {
        Ok((load_properties(default)?, Some(default)))
    } else {
        debug!("No property file at {}, starting empty", default.display());
        Ok((PropertySet::new(), None))
    }
}
