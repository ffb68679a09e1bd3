//! Batch extraction of sound event CSV files

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use ue_anim_notify::{
    CsvOptions, DEFAULT_OUTPUT_SUFFIX, ExportDocument, ExtractOptions, WEAPON_SOUND_NOTIFY,
    extract_sound_events_with, output_path_for, write_csv_file,
};

use crate::utils::{BatchStatus, collect_inputs, create_progress_bar, show_completion, show_status};

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// JSON exports or directories containing them
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Write CSV files here instead of next to each export
    #[arg(short, long, value_name = "DIR", env = "UE_SOUND_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suffix appended to the export file stem
    #[arg(short, long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    pub suffix: String,

    /// Field delimiter: "tab" or a single ASCII character
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Do not prefix the CSV with a UTF-8 byte order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Descend into subdirectories of directory inputs
    #[arg(short, long)]
    pub recursive: bool,

    /// NotifyName of the events to extract
    #[arg(short, long, default_value = WEAPON_SOUND_NOTIFY)]
    pub notify_name: String,

    /// Number of worker threads
    #[cfg(feature = "parallel")]
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

/// Settings shared by every file of a batch
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub extract: ExtractOptions,
    pub csv: CsvOptions,
    pub suffix: String,
    pub output_dir: Option<PathBuf>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            csv: CsvOptions::default(),
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_dir: None,
        }
    }
}

impl From<&ExtractArgs> for ProcessOptions {
    fn from(args: &ExtractArgs) -> Self {
        Self {
            extract: ExtractOptions {
                notify_name: args.notify_name.clone(),
            },
            csv: CsvOptions {
                delimiter: args.delimiter,
                write_bom: !args.no_bom,
            },
            suffix: args.suffix.clone(),
            output_dir: args.output_dir.clone(),
        }
    }
}

/// Result of processing one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A CSV file was written
    Written { output: PathBuf, rows: usize },
    /// The export had no matching notifies; nothing was written
    NoEvents,
}

/// Counts of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, path: &Path, result: Result<FileOutcome>, pb: &ProgressBar, quiet: bool) {
        match result {
            Ok(FileOutcome::Written { output, rows }) => {
                self.succeeded += 1;
                log::info!("{} -> {} ({rows} rows)", path.display(), output.display());
                if !quiet {
                    pb.suspend(|| {
                        println!(
                            "{} {} ({} events)",
                            style("✓").green(),
                            output.display(),
                            rows
                        );
                    });
                }
            }
            Ok(FileOutcome::NoEvents) => {
                self.skipped += 1;
                log::warn!("No sound events in {}, skipped", path.display());
            }
            Err(err) => {
                self.failed += 1;
                log::error!("Error processing {}: {err:#}", path.display());
            }
        }
        pb.inc(1);
    }

    /// Final status line of the batch
    pub fn status(&self) -> BatchStatus {
        if self.succeeded > 0 {
            BatchStatus::Success(self.succeeded)
        } else {
            BatchStatus::NothingProcessed
        }
    }
}

pub fn execute(args: ExtractArgs, quiet: bool) -> Result<()> {
    let inputs = collect_inputs(&args.files, args.recursive)?;
    if inputs.is_empty() {
        report(BatchStatus::NoJsonFiles, quiet);
        anyhow::bail!("No JSON files found");
    }

    let options = ProcessOptions::from(&args);
    if let Some(dir) = &options.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    report(BatchStatus::Processing(inputs.len()), quiet);

    let pb = create_progress_bar(inputs.len() as u64, "Extracting", quiet);

    #[cfg(feature = "parallel")]
    let summary = process_files_parallel(&inputs, &options, &pb, quiet, args.threads)?;
    #[cfg(not(feature = "parallel"))]
    let summary = process_files(&inputs, &options, &pb, quiet);

    pb.finish_and_clear();

    let status = summary.status();
    report(status, quiet);
    if summary.failed > 0 || summary.skipped > 0 {
        log::warn!(
            "{} failed, {} without sound events",
            summary.failed,
            summary.skipped
        );
    }

    if status.is_failure() {
        anyhow::bail!("No valid files processed");
    }

    if !quiet {
        show_completion(summary.succeeded);
    }

    Ok(())
}

fn report(status: BatchStatus, quiet: bool) {
    if !quiet {
        show_status(status);
    }
}

/// Extract one export and write its CSV
pub fn process_file(path: &Path, options: &ProcessOptions) -> Result<FileOutcome> {
    let document = ExportDocument::from_path(path)
        .with_context(|| format!("Failed to load export: {}", path.display()))?;

    let rows = extract_sound_events_with(&document, &options.extract)
        .with_context(|| format!("Failed to extract sound events: {}", path.display()))?;

    if rows.is_empty() {
        return Ok(FileOutcome::NoEvents);
    }

    let output = output_path_for(path, &options.suffix, options.output_dir.as_deref());
    write_csv_file(&rows, &output, &options.csv)
        .with_context(|| format!("Failed to write CSV file: {}", output.display()))?;

    Ok(FileOutcome::Written {
        output,
        rows: rows.len(),
    })
}

/// For each input, the earlier input that already owns its output path
///
/// Inputs with the same stem map to the same CSV when `output_dir` is set,
/// or when only the extension case differs.
fn claim_outputs<'a>(inputs: &'a [PathBuf], options: &ProcessOptions) -> Vec<Option<&'a Path>> {
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
    inputs
        .iter()
        .map(|path| {
            let output = output_path_for(path, &options.suffix, options.output_dir.as_deref());
            match owners.entry(output) {
                Entry::Occupied(entry) => Some(*entry.get()),
                Entry::Vacant(entry) => {
                    entry.insert(path);
                    None
                }
            }
        })
        .collect()
}

fn process_claimed(path: &Path, owner: Option<&Path>, options: &ProcessOptions) -> Result<FileOutcome> {
    if let Some(first) = owner {
        anyhow::bail!(
            "Output of {} would overwrite the output of {}",
            path.display(),
            first.display()
        );
    }
    process_file(path, options)
}

/// Process exports in order; failures are logged and counted
pub fn process_files(
    inputs: &[PathBuf],
    options: &ProcessOptions,
    pb: &ProgressBar,
    quiet: bool,
) -> BatchSummary {
    let owners = claim_outputs(inputs, options);
    let mut summary = BatchSummary::default();
    for (path, owner) in inputs.iter().zip(owners) {
        summary.record(path, process_claimed(path, owner, options), pb, quiet);
    }
    summary
}

#[cfg(feature = "parallel")]
fn process_files_parallel(
    inputs: &[PathBuf],
    options: &ProcessOptions,
    pb: &ProgressBar,
    quiet: bool,
    threads: Option<usize>,
) -> Result<BatchSummary> {
    use rayon::prelude::*;
    use std::sync::{Mutex, PoisonError};

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = threads {
        builder = builder.num_threads(num_threads);
    }
    let pool = builder.build().context("Failed to create thread pool")?;

    let owners = claim_outputs(inputs, options);
    let summary = Mutex::new(BatchSummary::default());
    pool.install(|| {
        inputs
            .par_iter()
            .zip(owners.par_iter())
            .for_each(|(path, owner)| {
                let result = process_claimed(path, *owner, options);
                summary
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .record(path, result, pb, quiet);
            });
    });

    Ok(summary.into_inner().unwrap_or_else(PoisonError::into_inner))
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => {
                    Ok(c as u8)
                }
                _ => Err(format!(
                    "invalid delimiter '{value}': expected \"tab\" or a single ASCII character"
                )),
            }
        }
    }
}
