use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use slidereel_core::AppConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(config: &AppConfig, path: Option<&Path>, action: ConfigAction) -> Result<()> {
    let default_path = AppConfig::config_path();
    let path = path.unwrap_or(&default_path);

    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists.\nUse --force to overwrite it.",
                    path.display()
                );
            }
            AppConfig::default().save_to(path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}
