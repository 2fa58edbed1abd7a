use crate::config::{CHART_CONFIG, Margins};
use crate::data::model::Series;

/// Horizontal domain: calendar months.
pub const MONTH_DOMAIN: (f64, f64) = (1.0, 12.0);

/// Linear map from a data domain onto a pixel range. No clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        // A collapsed domain maps everything to the middle of the range.
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) * (r1 - r0) / (d1 - d0)
    }
}

/// Size of the drawing surface plus the fixed margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport {
            width,
            height,
            margins: CHART_CONFIG.margins,
        }
    }

    /// Pixel y of the x axis baseline.
    pub fn baseline(&self) -> f64 {
        self.height - self.margins.bottom
    }
}

/// The pair of scales used for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    /// Scales fitted to `series`: months across, `[0, max]` up.
    pub fn for_series(series: &Series, viewport: &Viewport) -> Self {
        Self::with_y_max(y_domain_max(series), viewport)
    }

    pub fn with_y_max(y_max: f64, viewport: &Viewport) -> Self {
        let m = &viewport.margins;
        Scales {
            x: LinearScale::new(MONTH_DOMAIN, (m.left, viewport.width - m.right)),
            y: LinearScale::new((0.0, y_max), (viewport.height - m.bottom, m.top)),
        }
    }
}

/// Upper end of the y domain. An empty or all-zero series falls back to 1
/// so the scale never collapses.
pub fn y_domain_max(series: &Series) -> f64 {
    match series.max_value() {
        Some(max) if max != 0.0 => max,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Direction, MonthTotal};

    fn series(values: &[(u8, f64)]) -> Series {
        Series {
            direction: Direction::Import,
            totals: values
                .iter()
                .map(|&(month, value)| MonthTotal { month, value })
                .collect(),
        }
    }

    #[test]
    fn scale_endpoints_hit_the_margins() {
        let viewport = Viewport::new(1000.0, 600.0);
        let s = series(&[(1, 150.0), (2, 80.0), (7, 240.0)]);
        let scales = Scales::for_series(&s, &viewport);

        assert_eq!(scales.x.apply(1.0), 150.0);
        assert_eq!(scales.x.apply(12.0), 1000.0 - 50.0);
        assert_eq!(scales.y.apply(0.0), 600.0 - 150.0);
        assert_eq!(scales.y.apply(240.0), 50.0);
    }

    #[test]
    fn larger_values_draw_higher() {
        let scales = Scales::with_y_max(100.0, &Viewport::new(800.0, 500.0));
        assert!(scales.y.apply(75.0) < scales.y.apply(25.0));
    }

    #[test]
    fn empty_series_uses_unit_domain() {
        let viewport = Viewport::new(800.0, 500.0);
        let scales = Scales::for_series(&series(&[]), &viewport);
        assert_eq!(scales.y.domain, (0.0, 1.0));
        assert!(scales.y.apply(0.0).is_finite());

        let zeros = Scales::for_series(&series(&[(3, 0.0)]), &viewport);
        assert_eq!(zeros.y.domain, (0.0, 1.0));
    }

    #[test]
    fn collapsed_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
    }
}
