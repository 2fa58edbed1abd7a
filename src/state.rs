use std::path::PathBuf;

use crate::data::aggregate::build_series;
use crate::data::model::{Direction, Series, TradeDataset};

// ---------------------------------------------------------------------------
// View state machine
// ---------------------------------------------------------------------------

/// Which series the chart shows. Starts on imports; never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    ShowingImports,
    ShowingExports,
}

impl ViewState {
    pub fn direction(self) -> Direction {
        match self {
            ViewState::ShowingImports => Direction::Import,
            ViewState::ShowingExports => Direction::Export,
        }
    }
}

impl From<Direction> for ViewState {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Import => ViewState::ShowingImports,
            Direction::Export => ViewState::ShowingExports,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<TradeDataset>,

    /// Where the dataset came from.
    pub source: Option<PathBuf>,

    /// Monthly import totals, rebuilt only when a dataset is loaded.
    pub import_series: Series,

    /// Monthly export totals, rebuilt only when a dataset is loaded.
    pub export_series: Series,

    /// Currently displayed series.
    pub view: ViewState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            import_series: Series::empty(Direction::Import),
            export_series: Series::empty(Direction::Export),
            view: ViewState::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: aggregate both directions once and go
    /// back to the import view.
    pub fn set_dataset(&mut self, dataset: TradeDataset, source: Option<PathBuf>) {
        self.import_series = build_series(&dataset.records, Direction::Import);
        self.export_series = build_series(&dataset.records, Direction::Export);
        log::info!(
            "Aggregated {} import months, {} export months",
            self.import_series.len(),
            self.export_series.len()
        );

        self.view = ViewState::ShowingImports;
        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;
    }

    /// Switch the active selection.
    pub fn select(&mut self, direction: Direction) {
        let next = ViewState::from(direction);
        if next != self.view {
            log::debug!("View {:?} -> {:?}", self.view, next);
        }
        self.view = next;
    }

    pub fn series(&self, direction: Direction) -> &Series {
        match direction {
            Direction::Import => &self.import_series,
            Direction::Export => &self.export_series,
        }
    }

    /// The series currently on screen.
    pub fn active_series(&self) -> &Series {
        self.series(self.view.direction())
    }
}
