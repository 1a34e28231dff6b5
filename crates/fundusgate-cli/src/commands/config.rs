use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fundusgate_core::GateConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verify that an existing TOML config parses, then echo it back
    #[arg(long)]
    pub verify: Option<PathBuf>,
}

/// Print, save, or verify a GateConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    if let Some(ref path) = args.verify {
        let config = super::check::load_config(Some(path))?;
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let toml_str = toml::to_string_pretty(&GateConfig::default())?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{toml_str}");
    }

    Ok(())
}
