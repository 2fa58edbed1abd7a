use std::borrow::Cow;
use std::fmt::Write;

use crate::data::model::{Direction, MonthTotal, Series};

use super::scale::Scales;

/// Pixel polyline for one series. Plain data: drawing the same series with
/// the same scales always yields an equal value.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub direction: Direction,
    /// `[x, y]` in surface pixels, ordered by month.
    pub points: Vec<[f64; 2]>,
}

/// Map every monthly total through the scales, in month order.
///
/// Aggregated series are already ascending and are read in place; only a
/// hand-built, unordered series gets copied and sorted.
pub fn line(series: &Series, scales: &Scales) -> LineGeometry {
    let totals: Cow<'_, [MonthTotal]> = if is_month_ordered(&series.totals) {
        Cow::Borrowed(&series.totals)
    } else {
        let mut owned = series.totals.clone();
        owned.sort_by_key(|t| t.month);
        Cow::Owned(owned)
    };

    LineGeometry {
        direction: series.direction,
        points: totals
            .iter()
            .map(|t| [scales.x.apply(t.month as f64), scales.y.apply(t.value)])
            .collect(),
    }
}

fn is_month_ordered(totals: &[MonthTotal]) -> bool {
    totals.windows(2).all(|w| w[0].month <= w[1].month)
}

impl LineGeometry {
    /// A line needs two points; fewer draws nothing.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// SVG path data in d3's `line()` form: `M150,450L250,300`.
    /// Empty when there are no points.
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, [x, y]) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x},{y}");
        }
        d
    }
}
