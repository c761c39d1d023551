//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{load_taxonomy, ApplicationError};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::tree_traits::TreeDisplay;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render {
            file,
            outer_tag,
            inner_tag,
            start_path,
        }) => cmd_render(
            file,
            outer_tag.as_deref(),
            inner_tag.as_deref(),
            start_path.as_deref(),
        ),
        Some(Commands::Path { file, id }) => cmd_path(file, id),
        Some(Commands::Resolve { file, path }) => cmd_resolve(file, path),
        Some(Commands::Find { file, id }) => cmd_find(file, id),
        Some(Commands::Show { file }) => cmd_show(file),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run with --help for usage".to_string(),
        )),
    }
}

/// Settings for a document: local config is looked up next to it.
fn settings_for(file: &Path) -> CliResult<Settings> {
    Ok(Settings::load(file.parent())?)
}

#[instrument]
fn cmd_render(
    file: &Path,
    outer_tag: Option<&str>,
    inner_tag: Option<&str>,
    start_path: Option<&str>,
) -> CliResult<()> {
    for tag in [outer_tag, inner_tag].into_iter().flatten() {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CliError::InvalidArgs(format!("invalid tag name: {tag:?}")));
        }
    }

    let mut options = settings_for(file)?.render;
    if let Some(tag) = outer_tag {
        options.outer_tag = tag.to_string();
    }
    if let Some(tag) = inner_tag {
        options.inner_tag = tag.to_string();
    }
    if let Some(prefix) = start_path {
        options.start_path = prefix.to_string();
    }
    debug!(?options, "render options");

    let taxonomy = load_taxonomy(file)?;
    output::info(&taxonomy.render(&options));
    Ok(())
}

#[instrument]
fn cmd_path(file: &Path, id: &str) -> CliResult<()> {
    let taxonomy = load_taxonomy(file)?;
    if !taxonomy.contains(id) {
        return Err(ApplicationError::NodeNotFound(id.to_string()).into());
    }
    output::info(&taxonomy.path(id));
    Ok(())
}

#[instrument]
fn cmd_resolve(file: &Path, path: &str) -> CliResult<()> {
    let taxonomy = load_taxonomy(file)?;
    let id = taxonomy
        .find_by_path(path)
        .ok_or_else(|| ApplicationError::NodeNotFound(path.to_string()))?;
    output::info(id);
    Ok(())
}

#[instrument]
fn cmd_find(file: &Path, id: &str) -> CliResult<()> {
    let taxonomy = load_taxonomy(file)?;
    let node = taxonomy
        .find(id)
        .ok_or_else(|| ApplicationError::NodeNotFound(id.to_string()))?
        .to_node();
    let json = serde_json::to_string_pretty(&node).map_err(|e| ApplicationError::OperationFailed {
        context: format!("serialize node {id}"),
        source: Box::new(e),
    })?;
    output::info(&json);
    Ok(())
}

#[instrument]
fn cmd_show(file: &Path) -> CliResult<()> {
    let settings = settings_for(file)?;
    let taxonomy = load_taxonomy(file)?;
    output::header(&format!(
        "{} nodes, depth {}",
        taxonomy.len(),
        taxonomy.depth()
    ));
    output::info(&taxonomy.to_tree_string(settings.show_ids));
    Ok(())
}

#[instrument]
fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { dir } => {
            let settings = Settings::load(dir.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no config directory available on this platform"),
            }
            output::action("local", &local_config_path(Path::new("<document_dir>")).display());
        }
    }
    Ok(())
}
