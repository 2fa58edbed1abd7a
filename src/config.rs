//! Compile-time configuration: dataset selection, chart layout and styling.

/// File loaded at startup when no path is given on the command line.
pub const DEFAULT_DATA_PATH: &str = "./data/US_Textile_Fiber_Trade.csv";

/// Month tick labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Fixed record predicate: one commodity, one year.
pub struct TradeFilter {
    pub fiber_type: &'static str,
    pub year: i32,
}

pub const TRADE_FILTER: TradeFilter = TradeFilter {
    fiber_type: "raw_cotton",
    year: 2020,
};

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub struct ChartConfig {
    pub margins: Margins,
    /// Stroke colour of the data line, `#rrggbb`.
    pub line_color_hex: &'static str,
    pub line_width: f32,
    pub axis_color_hex: &'static str,
    /// Seconds for the newly selected line to fade in.
    pub fade_in_secs: f32,
    /// Seconds for the previous line to fade out.
    pub fade_out_secs: f32,
    /// Seconds for the y axis to rescale.
    pub axis_transition_secs: f32,
    /// Requested number of y ticks (the nice-step algorithm may return a few more or less).
    pub y_tick_count: usize,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
    pub tick_length: f64,
    pub tick_font_size: f32,
    pub label_font_size: f32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    margins: Margins {
        top: 50.0,
        right: 50.0,
        bottom: 150.0,
        left: 150.0,
    },
    line_color_hex: "#E6AA68",
    line_width: 5.0,
    axis_color_hex: "#444444",
    fade_in_secs: 1.0,
    fade_out_secs: 0.5,
    axis_transition_secs: 0.5,
    y_tick_count: 10,
    x_axis_label: "2020 (mos.)",
    y_axis_label: "Value (lbs.)",
    tick_length: 6.0,
    tick_font_size: 12.0,
    label_font_size: 15.0,
};
