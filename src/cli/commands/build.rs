use log::{debug, info, warn};
use std::path::PathBuf;

use crate::cli::types::Commands;
use crate::config::{self, Config, OutputFormat};
use crate::markdown::build_toc_with_options;
use crate::source::TextSource;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the build command
pub fn handle_build_command(
    command: &Commands,
    config_files: Option<&Vec<PathBuf>>,
) -> BoxResult<()> {
    if let Commands::Build {
        file,
        lines,
        max_depth,
        format,
        output,
    } = command {
        let mut config = config::load_config(PathBuf::from("."), config_files.cloned())?;

        // Command line arguments take precedence over configuration files
        config.merge(&Config {
            max_depth: *max_depth,
            format: *format,
            output: output.clone(),
        });
        config::validate_config(&config)?;

        let source = TextSource::from_args(file.clone(), *lines);
        debug!("Text source: {:?}", source);
        let markdown = source.read()?;

        let rendered = render_toc(&markdown, &config)?;
        if rendered.is_empty() {
            warn!("No headers found");
            return Ok(());
        }

        match &config.output {
            Some(path) => {
                fs::write_file(path, &rendered)?;
                info!("Table of contents written to {}", path.display());
            },
            None => fs::write_stdout(&rendered)?,
        }
    }

    Ok(())
}

/// Build the table of contents of `markdown` and render it in the configured format.
///
/// Returns an empty string when no header is listed.
pub fn render_toc(markdown: &str, config: &Config) -> BoxResult<String> {
    let toc = build_toc_with_options(markdown, &config.toc_options());
    debug!("Found {} headers to list", toc.len());

    if toc.is_empty() {
        return Ok(String::new());
    }

    match config.format() {
        OutputFormat::Markdown => Ok(toc.to_markdown()),
        OutputFormat::Json => Ok(format!("{}\n", toc.to_json()?)),
    }
}
