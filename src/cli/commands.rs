//! Command dispatch

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::{ConversionRequest, ConversionService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::Direction;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{web, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Some(Commands::Convert { value, to }) => cmd_convert(value, (*to).into()),
        Some(Commands::Serve { host, port }) => cmd_serve(config, host.clone(), *port),
        Some(Commands::Config { command }) => cmd_config(config, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "tempconv", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run 'tempconv --help'".into(),
        )),
    }
}

#[instrument]
fn cmd_convert(value: &str, direction: Direction) -> CliResult<()> {
    let service = ConversionService::new();
    let conversion = service.convert(&ConversionRequest::new(value, direction));
    conversion.value()?;
    output::info(&conversion);
    Ok(())
}

#[instrument]
fn cmd_serve(config: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut settings = Settings::load(config)?;
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }
    debug!("serve: {}", settings.bind_address());

    let container = Arc::new(ServiceContainer::new(settings));
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| InfraError::io("start async runtime", e))?;
    runtime.block_on(web::serve(container))?;
    Ok(())
}

fn cmd_config(config: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::detail(&format!(
                    "global:   {} ({})",
                    path.display(),
                    exists_label(&path)
                )),
                None => output::detail("global:   <no config directory>"),
            }
            if let Some(path) = config {
                output::detail(&format!(
                    "explicit: {} ({})",
                    path.display(),
                    exists_label(path)
                ));
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
    }
}

fn exists_label(path: &Path) -> &'static str {
    if path.exists() {
        "exists"
    } else {
        "missing"
    }
}
