use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundusgate_core::{Gate, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use crate::summary::{print_verdict_line, Styles};

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of images to validate
    pub dir: PathBuf,

    /// Gate configuration (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List every file's verdict, not just the summary
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let gate = Gate::new(super::check::load_config(args.config.as_deref())?);

    let mut files: Vec<PathBuf> = std::fs::read_dir(&args.dir)
        .with_context(|| format!("Failed to read directory {}", args.dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    info!(count = files.len(), "validating directory");

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Validating");

    // Each validation call is independent; fan out across the pool.
    let results: Vec<(PathBuf, Verdict)> = files
        .par_iter()
        .map(|path| {
            let verdict = match std::fs::read(path) {
                Ok(bytes) => gate.validate(&bytes),
                Err(err) => Verdict::Rejected(fundusgate_core::RejectReason::Internal(
                    err.to_string(),
                )),
            };
            pb.inc(1);
            (path.clone(), verdict)
        })
        .collect();
    pb.finish_with_message("Done");

    let styles = Styles::new();
    let mut accepted = 0usize;
    let mut reasons: BTreeMap<String, usize> = BTreeMap::new();
    for (path, verdict) in &results {
        if verdict.is_accepted() {
            accepted += 1;
        } else {
            *reasons.entry(verdict.message()).or_default() += 1;
        }
        if args.list {
            print_verdict_line(&styles, &path.display().to_string(), verdict);
        }
    }

    println!(
        "\n{} of {} image(s) accepted",
        styles.accepted.apply_to(accepted),
        results.len()
    );
    for (reason, count) in &reasons {
        println!("  {:>5}  {}", count, styles.rejected.apply_to(reason));
    }

    Ok(())
}
