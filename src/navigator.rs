use crate::charts::{Chart, ChartTab, X_AXIS_LABEL};
use crate::error::NavResult;
use crate::index::{JobId, JobIndex};
use crate::params::Selection;
use crate::report::{self, ReportVariable, TimeSeries};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Results root plus the job index built from it. Built once per page and
/// handed to whatever needs to resolve selections.
#[derive(Debug, Clone)]
pub struct Navigator {
    root: PathBuf,
    index: JobIndex,
}

impl Navigator {
    pub fn open<P: Into<PathBuf>>(root: P) -> NavResult<Self> {
        let root = root.into();
        info!("🧭 Opening results at {}", root.display());
        let index = JobIndex::open(&root)?;
        Ok(Self { root, index })
    }

    pub fn with_index<P: Into<PathBuf>>(root: P, index: JobIndex) -> Self {
        Self {
            root: root.into(),
            index,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> &JobIndex {
        &self.index
    }

    pub fn resolve(&self, selection: &Selection) -> NavResult<&JobId> {
        self.index.lookup(selection.key().as_str())
    }

    pub fn series(&self, selection: &Selection, variable: ReportVariable) -> NavResult<TimeSeries> {
        let job = self.resolve(selection)?;
        Ok(report::load(&self.root, job.as_str(), variable.code())?.with_label(variable.label()))
    }

    pub fn chart(&self, selection: &Selection, tab: ChartTab) -> NavResult<Chart> {
        let job = self.resolve(selection)?;
        debug!("{} resolved to job {}", selection.key(), job);

        let series = tab
            .variables()
            .iter()
            .map(|v| {
                report::load(&self.root, job.as_str(), v.code()).map(|s| s.with_label(v.label()))
            })
            .collect::<NavResult<Vec<_>>>()?;

        Ok(Chart {
            tab,
            title: tab.chart_title(selection),
            x_label: X_AXIS_LABEL,
            y_label: tab.y_label(),
            y_axis: tab.y_axis(),
            series,
        })
    }
}
