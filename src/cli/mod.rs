//! Interactive command-line interface: the entry/editing boundary that owns
//! ledger mutation, input validation, and write-through persistence.

pub mod commands;
pub mod forms;
pub mod output;

use std::path::PathBuf;

use bolso_config::{Config, ConfigManager};
use bolso_core::{Clock, PeriodKind};

use crate::{
    app::{AppState, SystemClock},
    errors::AppError,
};

/// Parsed invocation options for the `bolso_cli` binary.
#[derive(Debug, Default, PartialEq)]
pub struct CliOptions {
    pub data_dir: Option<PathBuf>,
    pub command: Option<CliCommand>,
}

#[derive(Debug, PartialEq)]
pub enum CliCommand {
    /// Non-interactive report export.
    Report { out: Option<PathBuf> },
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data-dir" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::InvalidArgs("--data-dir requires a path".into()))?;
                options.data_dir = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::InvalidArgs("--out requires a path".into()))?;
                match options.command.as_mut() {
                    Some(CliCommand::Report { out }) => *out = Some(PathBuf::from(value)),
                    None => {
                        return Err(AppError::InvalidArgs(
                            "--out only applies to the report command".into(),
                        ))
                    }
                }
            }
            "report" if options.command.is_none() => {
                options.command = Some(CliCommand::Report { out: None });
            }
            other => {
                return Err(AppError::InvalidArgs(format!("unknown argument: {other}")));
            }
        }
    }
    Ok(options)
}

pub fn run_cli() -> Result<(), AppError> {
    let options = parse_args(std::env::args().skip(1))?;
    let config = ConfigManager::with_default_location().load()?;
    let data_dir = options
        .data_dir
        .clone()
        .unwrap_or_else(|| config.resolve_data_root());
    let mut state = AppState::open(data_dir)?;
    let clock = SystemClock;

    match options.command {
        Some(CliCommand::Report { out }) => {
            let path =
                commands::report::export_to(&state, &config, &clock, out, PeriodKind::Month)?;
            println!("{}", path.display());
            Ok(())
        }
        None => run_interactive(&mut state, &config, &clock),
    }
}

fn run_interactive(
    state: &mut AppState,
    config: &Config,
    clock: &dyn Clock,
) -> Result<(), AppError> {
    output::banner();
    if !state.is_onboarded() {
        commands::onboarding::run(state)?;
    }
    loop {
        let items = [
            "Início",
            "Estatísticas",
            "Metas",
            "Registrar gasto",
            "Excluir gasto",
            "Relatório",
            "Configurações",
            "Sair",
        ];
        let choice = forms::select("O que você quer fazer?", &items)?;
        let result = match choice {
            0 => commands::dashboard::show(state, clock),
            1 => commands::statistics::show(state, clock),
            2 => commands::goals::manage(state, clock),
            3 => commands::expenses::register(state, clock),
            4 => commands::expenses::delete(state),
            5 => commands::report::export_interactive(state, config, clock),
            6 => commands::settings::manage(state, config),
            _ => break,
        };
        // recovery policy: surface the failure and let the user try again
        if let Err(err) = result {
            output::error(&format!("{err}"));
            tracing::warn!(error = %err, "command failed");
        }
        if !state.is_onboarded() {
            // data was reset from the settings screen
            commands::onboarding::run(state)?;
        }
    }
    Ok(())
}
