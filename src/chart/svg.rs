use std::fmt::Write;

use crate::config::CHART_CONFIG;
use crate::data::model::Series;

use super::axis::{month_ticks, value_ticks};
use super::geometry;
use super::scale::{Scales, Viewport, y_domain_max};

/// Render a standalone SVG document of `series`: axes, tick labels, axis
/// titles and the data line, laid out like the interactive chart.
pub fn render_document(series: &Series, viewport: &Viewport) -> String {
    let cfg = &CHART_CONFIG;
    let m = viewport.margins;
    let y_max = y_domain_max(series);
    let scales = Scales::with_y_max(y_max, viewport);
    let line = geometry::line(series, &scales);
    let baseline = viewport.baseline();
    let (w, h) = (viewport.width, viewport.height);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"<g class="axis" stroke="{}" font-size="{}" font-family="sans-serif">"#,
        cfg.axis_color_hex, cfg.tick_font_size
    );

    // x axis along the bottom margin
    let _ = writeln!(
        svg,
        r#"<line x1="{}" y1="{baseline}" x2="{}" y2="{baseline}"/>"#,
        m.left,
        w - m.right
    );
    for tick in month_ticks() {
        let x = scales.x.apply(tick.value);
        let _ = writeln!(
            svg,
            r#"<line x1="{x}" y1="{baseline}" x2="{x}" y2="{}"/><text x="{x}" y="{}" stroke="none" fill="{}" text-anchor="middle">{}</text>"#,
            baseline + cfg.tick_length,
            baseline + cfg.tick_length + cfg.tick_font_size as f64 + 2.0,
            cfg.axis_color_hex,
            tick.label
        );
    }

    // y axis along the left margin
    let _ = writeln!(
        svg,
        r#"<line x1="{0}" y1="{1}" x2="{0}" y2="{baseline}"/>"#,
        m.left, m.top
    );
    for tick in value_ticks(y_max, cfg.y_tick_count) {
        let y = scales.y.apply(tick.value);
        let _ = writeln!(
            svg,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/><text x="{}" y="{y}" stroke="none" fill="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            m.left - cfg.tick_length,
            m.left,
            m.left - cfg.tick_length - 3.0,
            cfg.axis_color_hex,
            tick.label
        );
    }
    let _ = writeln!(svg, "</g>");

    let _ = writeln!(
        svg,
        r#"<text class="axisLabel" x="{}" y="{}" text-anchor="middle" font-size="{}">{}</text>"#,
        w / 2.0,
        h - m.bottom / 2.0,
        cfg.label_font_size,
        cfg.x_axis_label
    );
    let _ = writeln!(
        svg,
        r#"<text class="axisLabel" transform="rotate(-90)" x="{}" y="{}" text-anchor="middle" font-size="{}">{}</text>"#,
        -h / 2.0,
        m.left / 2.0,
        cfg.label_font_size,
        cfg.y_axis_label
    );

    let _ = writeln!(
        svg,
        r#"<path class="line {}" d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
        series.direction,
        line.path_data(),
        cfg.line_color_hex,
        cfg.line_width
    );
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Direction, MonthTotal};

    #[test]
    fn document_contains_line_and_month_labels() {
        let series = Series {
            direction: Direction::Export,
            totals: vec![
                MonthTotal { month: 1, value: 100.0 },
                MonthTotal { month: 12, value: 50.0 },
            ],
        };
        let doc = render_document(&series, &Viewport::new(1000.0, 600.0));

        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains(r#"d="M150,50L950,250""#));
        assert!(doc.contains(">Jan</text>"));
        assert!(doc.contains(">Sept</text>"));
        assert!(doc.contains("line export"));
        assert!(doc.contains("2020 (mos.)"));
    }

    #[test]
    fn empty_series_still_renders_a_document() {
        let doc = render_document(&Series::empty(Direction::Import), &Viewport::new(800.0, 500.0));
        assert!(doc.contains(r#"d="""#));
        assert!(doc.contains(">1.0</text>"));
    }

    #[test]
    fn rendering_is_stable() {
        let series = Series {
            direction: Direction::Import,
            totals: vec![MonthTotal { month: 6, value: 3.0 }],
        };
        let viewport = Viewport::new(640.0, 480.0);
        assert_eq!(
            render_document(&series, &viewport),
            render_document(&series, &viewport)
        );
    }
}
