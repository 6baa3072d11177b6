//! The orbis pipeline: merge, clean, profile and validate, export.
//!
//! Every stage fully materializes its table before the next begins. Each
//! intermediate result is written to the source directory as soon as it is
//! produced.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use orbis_ingest::merge;
use orbis_model::{ColumnProfile, Issue};
use orbis_output::{
    AnalyticalStore, StoreCounts, export_run, write_cleaned, write_issues, write_merged,
    write_profile,
};
use orbis_transform::{CleanOptions, clean_frame};
use orbis_validate::{collect_issues, column_profiles, issues_frame, profiles_frame};

/// Inputs for one pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the source CSV extracts. Outputs are written here too.
    pub source_dir: PathBuf,
    pub options: CleanOptions,
}

impl PipelineConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            options: CleanOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CleanOptions) -> Self {
        self.options = options;
        self
    }
}

/// Paths of the four CSV outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub merged: PathBuf,
    pub cleaned: PathBuf,
    pub profile: PathBuf,
    pub issues: PathBuf,
}

/// Wall-clock time spent in each stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageTimings {
    pub merge: Duration,
    pub clean: Duration,
    pub validate: Duration,
    pub export: Option<Duration>,
    pub total: Duration,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: String,
    pub source_dir: PathBuf,
    pub merged_rows: usize,
    pub merged_columns: usize,
    pub cleaned_rows: usize,
    pub cleaned_columns: usize,
    pub outputs: OutputPaths,
    pub profiles: Vec<ColumnProfile>,
    pub issues: Vec<Issue>,
    /// Rows loaded into the analytical store, when one is configured.
    pub store: Option<StoreCounts>,
    pub timings: StageTimings,
}

/// Result of [`Pipeline::run`].
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// The merged table was empty; nothing was written.
    NothingToDo,
    Completed(RunSummary),
}

/// A configured pipeline with an optional analytical store.
pub struct Pipeline {
    config: PipelineConfig,
    store: Option<Box<dyn AnalyticalStore>>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Attach an analytical store; the cleaned and issues tables are loaded
    /// into it after the CSV outputs are written.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn AnalyticalStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs every stage under a `run` span tagged with `run_id`.
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the run: a missing source directory, a CSV
    /// that fails to parse, an output that cannot be written, or a store
    /// export failure.
    pub fn run(&mut self, run_id: &str) -> Result<PipelineOutcome> {
        let run_span = info_span!("run", run_id = %run_id);
        let _run_guard = run_span.enter();

        let source_dir = self.config.source_dir.clone();
        let options = self.config.options;
        options.validate().context("invalid cleaning options")?;
        info!(source_dir = %source_dir.display(), "starting pipeline");
        match &self.store {
            Some(store) => info!(store = store.name(), "analytical store configured"),
            None => info!("no analytical store configured; export will be skipped"),
        }

        let total_start = Instant::now();

        // =====================================================================
        // Stage 1: Merge
        // =====================================================================
        let merge_start = Instant::now();
        let merged = info_span!("merge")
            .in_scope(|| merge(&source_dir))
            .with_context(|| format!("merge source files in {}", source_dir.display()))?;
        if merged.height() == 0 || merged.width() == 0 {
            warn!(
                source_dir = %source_dir.display(),
                "no CSV rows found to merge; nothing to do"
            );
            return Ok(PipelineOutcome::NothingToDo);
        }
        let merged_path = write_merged(&merged, &source_dir).context("write merged table")?;
        let merge_elapsed = merge_start.elapsed();
        info!(
            rows = merged.height(),
            columns = merged.width(),
            path = %merged_path.display(),
            duration_ms = merge_elapsed.as_millis() as u64,
            "merged source files"
        );

        // =====================================================================
        // Stage 2: Clean
        // =====================================================================
        let clean_start = Instant::now();
        let cleaned = info_span!("clean")
            .in_scope(|| clean_frame(&merged, &options))
            .context("clean merged table")?;
        let cleaned_path = write_cleaned(&cleaned, &source_dir).context("write cleaned table")?;
        let clean_elapsed = clean_start.elapsed();
        info!(
            rows = cleaned.height(),
            columns = cleaned.width(),
            path = %cleaned_path.display(),
            duration_ms = clean_elapsed.as_millis() as u64,
            "cleaned table"
        );

        // =====================================================================
        // Stage 3: Profile and validate
        // =====================================================================
        let validate_start = Instant::now();
        let (profiles, issues) = info_span!("validate").in_scope(|| {
            (
                column_profiles(&cleaned),
                collect_issues(&cleaned, &source_dir),
            )
        });
        let profile_df = profiles_frame(&profiles).context("build profile table")?;
        let issues_df = issues_frame(&issues).context("build issues table")?;
        let profile_path = write_profile(&profile_df, &source_dir).context("write profile")?;
        let issues_path = write_issues(&issues_df, &source_dir).context("write issues")?;
        let validate_elapsed = validate_start.elapsed();
        info!(
            columns = profiles.len(),
            path = %profile_path.display(),
            "column profile written"
        );
        info!(
            issues = issues.len(),
            path = %issues_path.display(),
            duration_ms = validate_elapsed.as_millis() as u64,
            "validation issues written"
        );

        // =====================================================================
        // Stage 4: Analytical store export
        // =====================================================================
        let (store_counts, export_elapsed) = match self.store.as_deref_mut() {
            Some(store) => {
                let export_start = Instant::now();
                let counts = info_span!("export")
                    .in_scope(|| export_run(store, &cleaned, &issues_df, run_id))
                    .context("export to analytical store")?;
                let elapsed = export_start.elapsed();
                info!(
                    cleaned_rows = counts.cleaned,
                    issue_rows = counts.issues,
                    duration_ms = elapsed.as_millis() as u64,
                    "analytical store updated"
                );
                (Some(counts), Some(elapsed))
            }
            None => (None, None),
        };

        let total = total_start.elapsed();
        info!(
            duration_ms = total.as_millis() as u64,
            "pipeline completed successfully"
        );

        Ok(PipelineOutcome::Completed(RunSummary {
            run_id: run_id.to_string(),
            source_dir,
            merged_rows: merged.height(),
            merged_columns: merged.width(),
            cleaned_rows: cleaned.height(),
            cleaned_columns: cleaned.width(),
            outputs: OutputPaths {
                merged: merged_path,
                cleaned: cleaned_path,
                profile: profile_path,
                issues: issues_path,
            },
            profiles,
            issues,
            store: store_counts,
            timings: StageTimings {
                merge: merge_elapsed,
                clean: clean_elapsed,
                validate: validate_elapsed,
                export: export_elapsed,
                total,
            },
        }))
    }
}

/// Convenience for one-off runs without a store.
pub fn run_pipeline(
    source_dir: &Path,
    options: CleanOptions,
    run_id: &str,
) -> Result<PipelineOutcome> {
    Pipeline::new(PipelineConfig::new(source_dir).with_options(options)).run(run_id)
}
