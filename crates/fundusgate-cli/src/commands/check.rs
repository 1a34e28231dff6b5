use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use fundusgate_core::{Gate, GateConfig};
use serde::Serialize;

use crate::summary::{print_metrics, print_verdict_line, Styles};

#[derive(Args)]
pub struct CheckArgs {
    /// Image files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Gate configuration (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print diagnostic metrics for accepted images
    #[arg(long)]
    pub debug: bool,

    /// Emit results as JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckRecord {
    file: String,
    accepted: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<fundusgate_core::MetricSet>,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let gate = Gate::new(load_config(args.config.as_deref())?);
    let styles = Styles::new();
    let mut rejected = 0usize;
    let mut records = Vec::new();

    for path in &args.files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let (verdict, metrics) = gate.validate_debug(&bytes);
        if !verdict.is_accepted() {
            rejected += 1;
        }

        if args.json {
            records.push(CheckRecord {
                file: path.display().to_string(),
                accepted: verdict.is_accepted(),
                message: verdict.message(),
                metrics: if args.debug { metrics } else { None },
            });
        } else {
            print_verdict_line(&styles, &path.display().to_string(), &verdict);
            if args.debug {
                if let Some(ref metrics) = metrics {
                    print_metrics(&styles, metrics);
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    if rejected > 0 {
        bail!("{rejected} of {} image(s) rejected", args.files.len());
    }
    Ok(())
}

pub fn load_config(path: Option<&std::path::Path>) -> Result<GateConfig> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read config {}", p.display()))?;
            toml::from_str(&text).with_context(|| format!("Invalid config {}", p.display()))
        }
        None => Ok(GateConfig::default()),
    }
}
