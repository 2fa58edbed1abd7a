mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use app::TradeChartApp;
use clap::{Parser, ValueEnum, ValueHint};
use eframe::egui;

use crate::chart::scale::Viewport;
use crate::data::aggregate::build_series;
use crate::data::model::Direction;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Monthly raw-cotton import/export chart", long_about = None)]
struct Cli {
    /// Trade data file (.csv, .json or .parquet)
    #[arg(default_value = config::DEFAULT_DATA_PATH, value_hint = ValueHint::FilePath)]
    data: PathBuf,

    /// Write the chart as SVG to this path instead of opening a window
    #[arg(long, value_hint = ValueHint::FilePath)]
    export_svg: Option<PathBuf>,

    /// Series to export with --export-svg
    #[arg(long, value_enum, default_value_t = DirectionOpt::Import)]
    direction: DirectionOpt,

    /// SVG width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// SVG height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DirectionOpt {
    Import,
    Export,
}

impl From<DirectionOpt> for Direction {
    fn from(opt: DirectionOpt) -> Self {
        match opt {
            DirectionOpt::Import => Direction::Import,
            DirectionOpt::Export => Direction::Export,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = data::loader::load_file(&cli.data)
        .with_context(|| format!("loading {}", cli.data.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    if dataset.is_empty() {
        log::warn!("{} contains no usable records", cli.data.display());
    }

    if let Some(path) = &cli.export_svg {
        let direction = Direction::from(cli.direction);
        let series = build_series(&dataset.records, direction);
        let doc = chart::svg::render_document(&series, &Viewport::new(cli.width, cli.height));
        std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {direction} chart to {}", path.display());
        return Ok(());
    }

    let mut state = AppState::default();
    state.set_dataset(dataset, Some(cli.data));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fiber Trade Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(TradeChartApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
