// src/config.rs
use crate::platform::{Browser, Platform};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Defaults for the `uagen` command line, usually read from a YAML file.
///
/// The generator itself takes no configuration; these settings only decide
/// how many agents the binary prints and which choices it forces.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of user agents to print.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seed for reproducible output; a fresh thread-local source when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Platform to force.
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Browser to force.
    #[serde(default)]
    pub browser: Option<Browser>,
    /// Print one JSON object per line instead of bare strings.
    #[serde(default)]
    pub json: bool,
}

fn default_count() -> usize { 1 }

impl Default for Config {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            platform: None,
            browser: None,
            json: false,
        }
    }
}

/// Loads configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let file = File::open(path)?;
    let cfg: Config = serde_yaml::from_reader(BufReader::new(file))?;
    Ok(cfg)
}
