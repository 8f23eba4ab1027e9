//! Where the simulator output lives on disk.
//!
//! The classroom machines carry a one-line settings file next to the
//! binary (`PATH=/srv/fred/`). `--root` on the command line wins over it.

use crate::error::{NavResult, NavigatorError};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_SETTINGS_FILE: &str = "FRED_Navigator_Settings";
const PATH_PREFIX: &str = "PATH=";

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Simulator results root (overrides the settings file)
    #[arg(global = true, short, long)]
    pub root: Option<PathBuf>,

    #[arg(global = true, short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            root: None,
            settings: PathBuf::from(DEFAULT_SETTINGS_FILE),
        }
    }
}

impl ResultsConfig {
    pub fn resolve_root(&self) -> NavResult<PathBuf> {
        if let Some(root) = &self.root {
            debug!("Results root from command line: {}", root.display());
            return Ok(root.clone());
        }
        read_settings_root(&self.settings)
    }
}

pub fn read_settings_root<P: AsRef<Path>>(path: P) -> NavResult<PathBuf> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        NavigatorError::Configuration(format!(
            "cannot read settings file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let root = parse_settings_root(&content).ok_or_else(|| {
        NavigatorError::Configuration(format!(
            "settings file '{}' has no non-empty {} entry",
            path.display(),
            PATH_PREFIX
        ))
    })?;

    info!("📂 Results root from {}: {}", path.display(), root.display());
    Ok(root)
}

fn parse_settings_root(content: &str) -> Option<PathBuf> {
    content
        .split_whitespace()
        .find_map(|tok| tok.strip_prefix(PATH_PREFIX))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn key_file_path(root: &Path) -> PathBuf {
    root.join("RESULTS").join("KEY")
}

/// True for a single relative name such as `12` or `I_daily-0.dat`: no
/// separators, no `..`, no root or prefix.
pub fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

/// `root/RESULTS/JOB/<job>/DATA/REPORTS/<variable>_daily-0.dat`. Callers
/// check `job_id` and `variable` with [`is_plain_component`] first.
pub fn report_path(root: &Path, job_id: &str, variable: &str) -> PathBuf {
    root.join("RESULTS")
        .join("JOB")
        .join(job_id)
        .join("DATA")
        .join("REPORTS")
        .join(format!("{}_daily-0.dat", variable))
}
