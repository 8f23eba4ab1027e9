#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "Day Value Min Max Mean Std N";

/// Builder for a throwaway simulator results tree (RESULTS/KEY + job reports).
pub struct ResultsTree {
    dir: TempDir,
}

impl ResultsTree {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("RESULTS").join("JOB")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn key_file(self, content: &str) -> Self {
        fs::write(self.root().join("RESULTS").join("KEY"), content).unwrap();
        self
    }

    /// Writes a well-formed report whose record `i` is `(days[i], values[i])`.
    pub fn report(self, job: &str, variable: &str, points: &[(f64, f64)]) -> Self {
        let mut body = String::from(HEADER);
        body.push('\n');
        for (day, value) in points {
            body.push_str(&format!("{} {} 0 0 0 0 0 1\n", day, value));
        }
        self.raw_report(job, variable, &body)
    }

    pub fn raw_report(self, job: &str, variable: &str, content: &str) -> Self {
        let path = report_path(self.root(), job, variable);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    /// Every variable of one job, each with a distinct curve.
    pub fn full_job(mut self, job: &str, days: usize) -> Self {
        for (k, variable) in ["S", "E", "I", "R", "C", "Cs", "AR", "ARs", "P"]
            .iter()
            .enumerate()
        {
            let points: Vec<(f64, f64)> = (0..days)
                .map(|d| (d as f64, (d * (k + 1)) as f64))
                .collect();
            self = self.report(job, variable, &points);
        }
        self
    }
}

pub fn report_path(root: &Path, job: &str, variable: &str) -> PathBuf {
    root.join("RESULTS")
        .join("JOB")
        .join(job)
        .join("DATA")
        .join("REPORTS")
        .join(format!("{}_daily-0.dat", variable))
}
