use crate::params::Selection;
use crate::report::{ReportVariable, TimeSeries};
use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

pub const X_AXIS_LABEL: &str = "Days";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, ValueEnum, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ChartTab {
    Seir,
    Incidence,
    AttackRate,
    Prevalence,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub tick: f64,
}

impl ChartTab {
    pub fn title(&self) -> &'static str {
        match self {
            ChartTab::Seir => "SEIR",
            ChartTab::Incidence => "Incidence",
            ChartTab::AttackRate => "Attack Rate",
            ChartTab::Prevalence => "Prevalence",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartTab::AttackRate => "% Infected",
            _ => "Number of People",
        }
    }

    pub fn y_axis(&self) -> AxisRange {
        let (max, tick) = match self {
            ChartTab::Seir => (1_200_000.0, 100_000.0),
            ChartTab::Incidence => (120_000.0, 10_000.0),
            ChartTab::AttackRate => (100.0, 5.0),
            ChartTab::Prevalence => (550_000.0, 50_000.0),
        };
        AxisRange {
            min: 0.0,
            max,
            tick,
        }
    }

    /// Report variables plotted on this tab, in legend order.
    pub fn variables(&self) -> &'static [ReportVariable] {
        use ReportVariable::*;
        match self {
            ChartTab::Seir => &[S, E, I, R],
            ChartTab::Incidence => &[C, Cs],
            ChartTab::AttackRate => &[Ar, Ars],
            ChartTab::Prevalence => &[P],
        }
    }

    pub fn chart_title(&self, selection: &Selection) -> String {
        format!("{}: {}", self.title(), selection.caption())
    }
}

/// Everything a chart widget needs, with the series already loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub tab: ChartTab,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_axis: AxisRange,
    pub series: Vec<TimeSeries>,
}
