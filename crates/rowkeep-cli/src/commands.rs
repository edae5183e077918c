use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rowkeep_cli::form_args::build_form;
use rowkeep_core::{Engine, EngineError, load_config};
use rowkeep_model::{FormValue, Row, Schema, SortOutcome, UpsertResult};
use rowkeep_store::CsvTable;
use tracing::{debug, error};

use crate::cli::{ListArgs, ShowArgs, SubmitArgs};

/// Result of a submission that reached the engine.
pub enum SubmitOutcome {
    Saved(UpsertResult),
    /// Field errors the user can correct and resubmit.
    Rejected(EngineError),
}

/// Loads the configuration and opens the engine on its CSV table.
pub fn open_engine(config_path: &Path, table: Option<&Path>) -> Result<Engine<CsvTable>> {
    let config = load_config(config_path)?;
    let path = table.map_or_else(|| config.table.path.clone(), Path::to_path_buf);
    debug!(path = %path.display(), "opening table");
    let store = CsvTable::new(&path);
    Engine::open(store, config.schema, config.upsert)
        .with_context(|| format!("failed to open table {}", path.display()))
}

pub fn run_schema(engine: &Engine<CsvTable>) -> Schema {
    engine.schema().clone()
}

pub fn run_submit(engine: &mut Engine<CsvTable>, args: &SubmitArgs) -> Result<SubmitOutcome> {
    if args.no_sort {
        engine.set_sort_after_write(false);
    }
    let today = Local::now().date_naive();
    let form = build_form(engine.schema(), args.key.as_deref(), &args.set, today);
    match engine.submit(form) {
        Ok(result) => Ok(SubmitOutcome::Saved(result)),
        Err(error) if error.is_field_error() => Ok(SubmitOutcome::Rejected(error)),
        Err(error) => {
            error!(%error, "submission failed");
            Err(error).context("submission failed")
        }
    }
}

pub fn run_show(engine: &Engine<CsvTable>, args: &ShowArgs) -> Result<Option<Row>> {
    let key = FormValue::from(args.key.as_str());
    Ok(engine.find(&key)?)
}

pub fn run_list(engine: &Engine<CsvTable>, args: &ListArgs) -> Result<Vec<Row>> {
    Ok(engine.list_all(args.sorted)?)
}

pub fn run_sort(engine: &mut Engine<CsvTable>) -> Result<SortOutcome> {
    engine.resort().context("re-sort failed")
}

pub fn run_clear(engine: &mut Engine<CsvTable>) -> Result<()> {
    engine.clear_rows().context("clearing rows failed")
}
