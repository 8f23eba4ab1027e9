//! State behind one topic page: the slider positions, the visible tab and
//! the chart currently on screen. Every change re-resolves and reloads; a
//! failed reload reports the error and leaves the old chart showing.

use crate::charts::{Chart, ChartTab};
use crate::error::NavResult;
use crate::index::ParameterKey;
use crate::navigator::Navigator;
use crate::params::{Selection, Topic};
use tracing::warn;

pub struct Session {
    navigator: Navigator,
    selection: Selection,
    tab: ChartTab,
    chart: Option<Chart>,
    /// Key and tab the chart on screen was loaded for.
    shown: Option<(ParameterKey, ChartTab)>,
}

impl Session {
    /// Starts on the topic's default selection with the SEIR tab, like the
    /// pages do. Fails if that first chart cannot be loaded.
    pub fn new(navigator: Navigator, topic: Topic) -> NavResult<Self> {
        let mut session = Self {
            navigator,
            selection: Selection::default_for(topic),
            tab: ChartTab::Seir,
            chart: None,
            shown: None,
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tab(&self) -> ChartTab {
        self.tab
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn set_r0(&mut self, r0: f64) -> NavResult<()> {
        let next = self.selection.with_r0(r0)?;
        self.apply(next, self.tab)
    }

    pub fn set_immunization(&mut self, rate: f64) -> NavResult<()> {
        let next = self.selection.with_immunization(rate)?;
        self.apply(next, self.tab)
    }

    pub fn select_tab(&mut self, tab: ChartTab) -> NavResult<()> {
        self.apply(self.selection, tab)
    }

    fn apply(&mut self, next: Selection, tab: ChartTab) -> NavResult<()> {
        // Sliders fire on every pixel; only a new tick means new data.
        let showing = self
            .shown
            .as_ref()
            .is_some_and(|(key, shown_tab)| *shown_tab == tab && *key == next.key());
        self.selection = next;
        self.tab = tab;
        if showing {
            return Ok(());
        }
        self.refresh()
    }

    /// Reloads the current selection and tab unconditionally.
    pub fn refresh(&mut self) -> NavResult<()> {
        match self.navigator.chart(&self.selection, self.tab) {
            Ok(chart) => {
                self.chart = Some(chart);
                self.shown = Some((self.selection.key(), self.tab));
                Ok(())
            }
            Err(e) => {
                warn!("⚠️  No chart for {} ({}): {}", self.selection.key(), self.tab, e);
                Err(e)
            }
        }
    }
}
