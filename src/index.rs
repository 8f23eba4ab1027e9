//! Parameter-combination → job lookup, built from `RESULTS/KEY`.

use crate::error::{NavResult, NavigatorError};
use crate::settings::{is_plain_component, key_file_path};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A key exactly as it appears in the key file, e.g. `R0=2.4-Immunization=0.2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParameterKey(String);

impl ParameterKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParameterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParameterKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory name of one simulator job under `RESULTS/JOB/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobIndex {
    jobs: HashMap<ParameterKey, JobId>,
}

impl JobIndex {
    /// Index of the results tree rooted at `root`.
    pub fn open(root: &Path) -> NavResult<Self> {
        Self::build(key_file_path(root))
    }

    pub fn build<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NavigatorError::Configuration(format!(
                "cannot read key file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let index = Self::parse(&content, &path.display().to_string())?;
        info!("🔑 Indexed {} jobs from {}", index.len(), path.display());
        Ok(index)
    }

    /// Reads alternating `key id` tokens. `origin` only names the source in errors.
    /// A job id must be a single directory name under `RESULTS/JOB`.
    pub fn parse(content: &str, origin: &str) -> NavResult<Self> {
        let mut jobs = HashMap::new();
        let mut tokens = content.split_whitespace();

        while let Some(key) = tokens.next() {
            let id = tokens.next().ok_or_else(|| {
                NavigatorError::MalformedIndex(format!(
                    "{}: key '{}' has no job id (odd token count)",
                    origin, key
                ))
            })?;
            if !is_plain_component(id) {
                return Err(NavigatorError::MalformedIndex(format!(
                    "{}: key '{}' maps to '{}', which is not a job directory name",
                    origin, key, id
                )));
            }

            if let Some(previous) = jobs.insert(ParameterKey::new(key), JobId::new(id)) {
                debug!("Key '{}' repeated; job {} replaced by {}", key, previous, id);
            }
        }

        Ok(Self { jobs })
    }

    pub fn lookup(&self, key: &str) -> NavResult<&JobId> {
        self.jobs
            .get(key)
            .ok_or_else(|| NavigatorError::UnknownParameterKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.jobs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &JobId)> {
        let mut entries: Vec<_> = self.jobs.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
