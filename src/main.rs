// src/main.rs
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::Rng;

use uagen::config::{load, Config};
use uagen::{Browser, Generator, Platform};

/// Print random, well-formed browser User-Agent strings.
#[derive(Parser, Debug)]
#[command(name = "uagen", version, about)]
struct Cli {
    /// Number of user agents to print.
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Force the platform (windows, linux, macos).
    #[arg(short, long)]
    platform: Option<Platform>,
    /// Force the browser (firefox, edge, ie, chrome, safari).
    #[arg(short, long)]
    browser: Option<Browser>,
    /// Print one JSON object per line.
    #[arg(long)]
    json: bool,
    /// YAML file with defaults for the options above.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line flags over the file (or built-in) defaults.
    fn into_config(self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(count) = self.count {
            cfg.count = count;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.platform.is_some() {
            cfg.platform = self.platform;
        }
        if self.browser.is_some() {
            cfg.browser = self.browser;
        }
        cfg.json |= self.json;
        Ok(cfg)
    }
}

fn emit<R: Rng>(generator: &mut Generator<R>, cfg: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..cfg.count {
        let sample = generator.constrained(cfg.platform, cfg.browser)?;
        if cfg.json {
            writeln!(out, "{}", serde_json::to_string(&sample)?)?;
        } else {
            writeln!(out, "{}", sample.user_agent)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cfg = Cli::parse().into_config()?;
    info!(
        "Generating {} user agent(s) (seed: {:?}, platform: {:?}, browser: {:?})",
        cfg.count, cfg.seed, cfg.platform, cfg.browser
    );

    match cfg.seed {
        Some(seed) => emit(&mut Generator::seeded(seed), &cfg),
        None => emit(&mut Generator::new(), &cfg),
    }
}
