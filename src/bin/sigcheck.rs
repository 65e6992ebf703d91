use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;
use walkdir::WalkDir;

use sigstream::logger::{log_warn, set_log_file};
use sigstream::{Error, check_file};

#[derive(Parser)]
#[command(
    name = "sigcheck",
    version,
    about = "Batch check that files begin with the PNG signature"
)]
struct Cli {
    /// Input files or directories (recurses directories).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// When recursing directories, consider every file instead of only *.png.
    #[arg(long)]
    all_files: bool,

    /// Emit a JSON report instead of human readable output.
    #[arg(long)]
    json: bool,

    /// Number of concurrent worker threads.
    #[arg(long)]
    jobs: Option<usize>,

    /// Stop on first failure.
    #[arg(long)]
    fail_fast: bool,

    /// Append warnings and errors to a log file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ok,
    Mismatch,
    Truncated,
    Error,
}

#[derive(serde::Serialize)]
struct FileReport {
    path: PathBuf,
    status: Status,
    detail: Option<String>,
}

type AnyError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        set_log_file(path)?;
    }
    if let Some(jobs) = cli.jobs {
        // Best-effort: configure global rayon pool once. Ignore error if already set.
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global();
    }

    let files = discover_inputs(&cli.inputs, cli.all_files);
    if files.is_empty() {
        return Err("no input files found".into());
    }

    let reports: Vec<FileReport> = if cli.fail_fast {
        files
            .par_iter()
            .map(|path| {
                let report = check_one(path);
                if report.status == Status::Ok {
                    Ok(report)
                } else {
                    let detail = report.detail.unwrap_or_default();
                    Err(format!("{}: {detail}", report.path.display()).into())
                }
            })
            .collect::<Result<Vec<_>, AnyError>>()?
    } else {
        files.par_iter().map(|path| check_one(path)).collect()
    };

    let failures = reports.iter().filter(|r| r.status != Status::Ok).count();

    if cli.json {
        serde_json::to_writer_pretty(std::io::stdout(), &reports)?;
        println!();
    } else {
        for report in &reports {
            match &report.detail {
                None => println!("{}: ok", report.path.display()),
                Some(detail) => println!("{}: {detail}", report.path.display()),
            }
        }
    }

    if failures > 0 {
        return Err(format!(
            "{failures} of {} files failed signature validation",
            reports.len()
        )
        .into());
    }
    Ok(())
}

fn check_one(path: &Path) -> FileReport {
    match check_file(path) {
        Ok(()) => FileReport {
            path: path.to_path_buf(),
            status: Status::Ok,
            detail: None,
        },
        Err(err) => {
            log_warn(&format!("{}: {err}", path.display()));
            let status = match err {
                Error::SignatureMismatch { .. } => Status::Mismatch,
                Error::Truncated { .. } => Status::Truncated,
                Error::Io(_) => Status::Error,
            };
            FileReport {
                path: path.to_path_buf(),
                status,
                detail: Some(err.to_string()),
            }
        }
    }
}

fn discover_inputs(inputs: &[PathBuf], all_files: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_map(Result::ok)
            {
                let path = entry.path();
                if path.is_file() && (all_files || is_png(path)) {
                    files.push(path.to_path_buf());
                }
            }
        } else if input.is_file() {
            // Explicitly named files are checked whatever their extension.
            files.push(input.clone());
        } else {
            // Non-existent paths are ignored; shell globbing typically expands patterns.
        }
    }
    files.sort();
    files.dedup();
    files
}

fn is_png(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
