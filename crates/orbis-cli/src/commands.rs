use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{error, info};

use orbis_cli::logging::{LogConfig, RunLogging};
use orbis_cli::pipeline::{Pipeline, PipelineConfig, PipelineOutcome};
use orbis_cli::run_id::new_run_id;
use orbis_ingest::list_source_files;
use orbis_output::AnalyticalStore;
use orbis_transform::CleanOptions;

use crate::cli::{RunArgs, SourcesArgs};
use crate::summary::source_table;

/// Runs the pipeline with a run-scoped logging context.
pub fn run_pipeline(args: &RunArgs, log_config: &LogConfig) -> Result<PipelineOutcome> {
    let run_id = new_run_id();
    let logging = RunLogging::start(log_config, &run_id).context("initialize run logging")?;
    if let Some(path) = logging.log_file() {
        info!(run_id = %run_id, log_file = %path.display(), "logging to file");
    }

    let options = match args.numeric_threshold {
        Some(threshold) => {
            CleanOptions::with_numeric_threshold(threshold).context("--numeric-threshold")?
        }
        None => CleanOptions::default(),
    };
    let config = PipelineConfig::new(args.faf5_dir()).with_options(options);

    let mut pipeline = Pipeline::new(config);
    if let Some(store) = open_store(args)? {
        pipeline = pipeline.with_store(store);
    }

    let outcome = pipeline.run(&run_id);
    if let Err(err) = &outcome {
        error!(run_id = %run_id, error = format!("{err:#}"), "pipeline failed");
    }
    outcome
}

#[cfg(feature = "sqlite")]
fn open_store(args: &RunArgs) -> Result<Option<Box<dyn AnalyticalStore>>> {
    if args.no_store {
        return Ok(None);
    }
    let store = orbis_output::SqliteStore::deferred(&args.store_path());
    Ok(Some(Box::new(store)))
}

#[cfg(not(feature = "sqlite"))]
fn open_store(args: &RunArgs) -> Result<Option<Box<dyn AnalyticalStore>>> {
    if args.store.is_some() {
        bail!("--store requires a build with the `sqlite` feature");
    }
    Ok(None)
}

/// Lists the eligible source files of a FAF5 directory.
pub fn run_sources(args: &SourcesArgs) -> Result<Table> {
    let dir = args.faf5_dir();
    let files = list_source_files(&dir)
        .with_context(|| format!("list source files in {}", dir.display()))?;
    if files.is_empty() {
        bail!("no source CSV files in {}", dir.display());
    }

    let mut rows = Vec::with_capacity(files.len());
    for path in files {
        let size = std::fs::metadata(&path)
            .with_context(|| format!("read metadata for {}", path.display()))?
            .len();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        rows.push((name, size));
    }
    Ok(source_table(&rows))
}
