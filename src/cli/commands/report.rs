//! Report export: composes the document in the core and writes it to disk.

use std::{fs, path::PathBuf};

use bolso_config::Config;
use bolso_core::{compose_report, resolve_period, Clock, PeriodKind};

use crate::{
    app::AppState,
    cli::{forms, output},
    errors::AppError,
};

const PERIOD_KINDS: [PeriodKind; 3] = [PeriodKind::Month, PeriodKind::Quarter, PeriodKind::Year];

pub fn export_interactive(
    state: &AppState,
    config: &Config,
    clock: &dyn Clock,
) -> Result<(), AppError> {
    let labels: Vec<&str> = PERIOD_KINDS.iter().map(PeriodKind::picker_label).collect();
    let kind = PERIOD_KINDS[forms::select("Período do relatório", &labels)?];

    let path = export_to(state, config, clock, None, kind)?;
    output::success("Relatório gerado com sucesso!");
    output::info(&format!("Salvo em {}", path.display()));
    Ok(())
}

/// Composes and writes the report; the file name is deterministic, so a
/// second export on the same day overwrites the first (last write wins).
pub fn export_to(
    state: &AppState,
    config: &Config,
    clock: &dyn Clock,
    out: Option<PathBuf>,
    kind: PeriodKind,
) -> Result<PathBuf, AppError> {
    let ledger = state.require_ledger()?;
    let now = clock.now();
    let window = resolve_period(kind, now);

    let document = compose_report(
        &ledger.profile,
        &ledger.transactions,
        &ledger.goals,
        &window,
        now.date(),
    )?;

    let dir = out.unwrap_or_else(|| config.resolve_report_root());
    fs::create_dir_all(&dir)?;
    let path = dir.join(&document.file_name);
    fs::write(&path, document.render())?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
