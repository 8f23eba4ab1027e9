use crate::error::{NavResult, NavigatorError};
use crate::settings::{is_plain_component, report_path};
use serde::Serialize;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

const HEADER_TOKENS: usize = 7;
const RECORD_TOKENS: usize = 8;

/// Per-day report files written by the simulator under `DATA/REPORTS/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr, Serialize)]
pub enum ReportVariable {
    S,
    E,
    I,
    R,
    C,
    Cs,
    #[strum(serialize = "AR")]
    #[serde(rename = "AR")]
    Ar,
    #[strum(serialize = "ARs")]
    #[serde(rename = "ARs")]
    Ars,
    P,
}

impl ReportVariable {
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportVariable::S => "Susceptible",
            ReportVariable::E => "Exposed",
            ReportVariable::I => "Infected",
            ReportVariable::R => "Recovered",
            ReportVariable::C => "Incidence",
            ReportVariable::Cs => "Symptomatic Incidence",
            ReportVariable::Ar => "Attack Rate",
            ReportVariable::Ars => "Clinical Attack Rate",
            ReportVariable::P => "Prevalence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub day: f64,
    pub value: f64,
}

/// Points in file order. The loader neither sorts nor deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub label: String,
    pub points: Vec<Point>,
}

impl TimeSeries {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest value; the earliest point wins a tie. NaN values never win.
    pub fn peak(&self) -> Option<Point> {
        let mut best: Option<Point> = None;
        for p in self.points.iter().filter(|p| !p.value.is_nan()) {
            if best.map_or(true, |b| p.value > b.value) {
                best = Some(*p);
            }
        }
        best
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Loads `<variable>_daily-0.dat` of one job. The variable code is taken as-is;
/// an unknown code surfaces as `ReportNotFound`, as does a job id or code that
/// would leave the job's report directory.
pub fn load(root: &Path, job_id: &str, variable: &str) -> NavResult<TimeSeries> {
    let path = report_path(root, job_id, variable);
    let not_found = |source: io::Error| NavigatorError::ReportNotFound {
        path: path.clone(),
        source,
    };

    if !is_plain_component(job_id) || !is_plain_component(&format!("{}_daily-0.dat", variable)) {
        return Err(not_found(io::Error::new(
            ErrorKind::InvalidInput,
            format!("job '{}' / variable '{}' is not a plain name", job_id, variable),
        )));
    }

    let mut content = String::new();
    {
        let mut file = File::open(&path).map_err(not_found)?;
        file.read_to_string(&mut content).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => NavigatorError::MalformedReport {
                path: path.clone(),
                reason: format!("not text: {}", e),
            },
            _ => not_found(e),
        })?;
    }

    let points = parse_report(&content, &path)?;
    debug!("Loaded {} points from {}", points.len(), path.display());

    Ok(TimeSeries {
        label: variable.to_string(),
        points,
    })
}

/// Skips the 7-token header, then reads 8-token records of which only the
/// first two (day, value) are kept.
pub fn parse_report(content: &str, path: &Path) -> NavResult<Vec<Point>> {
    let malformed = |reason: String| NavigatorError::MalformedReport {
        path: path.to_path_buf(),
        reason,
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() < HEADER_TOKENS {
        return Err(malformed(format!(
            "header needs {} tokens, found {}",
            HEADER_TOKENS,
            tokens.len()
        )));
    }

    let body = &tokens[HEADER_TOKENS..];
    if body.len() % RECORD_TOKENS != 0 {
        return Err(malformed(format!(
            "{} data tokens is not a whole number of {}-token records",
            body.len(),
            RECORD_TOKENS
        )));
    }

    let parse_field = |record: usize, field: &str, token: &str| -> NavResult<f64> {
        token.parse::<f64>().map_err(|_| {
            malformed(format!(
                "record {}: {} '{}' is not a number",
                record + 1,
                field,
                token
            ))
        })
    };

    body.chunks_exact(RECORD_TOKENS)
        .enumerate()
        .map(|(i, record)| {
            Ok(Point {
                day: parse_field(i, "day", record[0])?,
                value: parse_field(i, "value", record[1])?,
            })
        })
        .collect()
}
