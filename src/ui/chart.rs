use std::f32::consts::FRAC_PI_2;

use eframe::egui::{Align2, Color32, FontId, Id, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui};
use eframe::egui::epaint::TextShape;

use crate::chart::axis::{month_ticks, value_ticks};
use crate::chart::geometry::{self, LineGeometry};
use crate::chart::scale::{Scales, Viewport, y_domain_max};
use crate::color::{axis_color, line_color, with_opacity};
use crate::config::CHART_CONFIG;
use crate::data::model::Direction;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trade chart (central panel)
// ---------------------------------------------------------------------------

/// Paint the monthly trade chart into the remaining space of `ui`.
///
/// Each direction's line carries its own animated opacity: the selected one
/// eases to 1 and the other to 0, so switching views fades the old line out
/// while the new one fades in. A second switch mid-fade retargets both
/// animations from wherever they are, and the y axis eases to the new domain
/// the same way.
pub fn trade_chart(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a trade file to view the chart  (File → Open…)");
        });
        return;
    }

    let cfg = &CHART_CONFIG;
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);
    let ctx = ui.ctx().clone();

    let active = state.view.direction();

    // Only the blend factor is an f32 animation; the maximum stays f64.
    let blend = ctx.animate_value_with_time(
        Id::new("trade_chart_y_blend"),
        blend_target(active),
        cfg.axis_transition_secs,
    );
    let axis_max = blend_max(
        y_domain_max(state.series(Direction::Import)),
        y_domain_max(state.series(Direction::Export)),
        blend,
    );
    draw_axes(&painter, rect, &viewport, axis_max);

    for direction in Direction::ALL {
        let (target, secs) = fade_target(direction, active);
        let opacity = ctx.animate_value_with_time(Id::new(("trade_line", direction)), target, secs);
        if opacity <= 0.0 {
            continue;
        }

        let series = state.series(direction);
        let line = geometry::line(series, &Scales::for_series(series, &viewport));
        paint_line(&painter, rect, &line, opacity);
    }
}

/// Opacity target and easing duration for one line given the selected view.
pub(crate) fn fade_target(direction: Direction, active: Direction) -> (f32, f32) {
    if direction == active {
        (1.0, CHART_CONFIG.fade_in_secs)
    } else {
        (0.0, CHART_CONFIG.fade_out_secs)
    }
}

/// 0 blends the y axis fully to the import domain, 1 to the export domain.
fn blend_target(active: Direction) -> f32 {
    match active {
        Direction::Import => 0.0,
        Direction::Export => 1.0,
    }
}

/// Y-axis maximum part way between the import and export domains.
/// The endpoints are returned unchanged.
pub(crate) fn blend_max(import_max: f64, export_max: f64, t: f32) -> f64 {
    if t <= 0.0 {
        import_max
    } else if t >= 1.0 {
        export_max
    } else {
        import_max + (export_max - import_max) * f64::from(t)
    }
}

fn to_screen(rect: Rect, x: f64, y: f64) -> Pos2 {
    Pos2::new(rect.min.x + x as f32, rect.min.y + y as f32)
}

fn paint_line(painter: &Painter, rect: Rect, line: &LineGeometry, opacity: f32) {
    if !line.is_drawable() {
        return;
    }
    let points: Vec<Pos2> = line
        .points
        .iter()
        .map(|&[x, y]| to_screen(rect, x, y))
        .collect();
    let stroke = Stroke::new(CHART_CONFIG.line_width, with_opacity(line_color(), opacity));
    painter.add(Shape::line(points, stroke));
}

fn draw_axes(painter: &Painter, rect: Rect, viewport: &Viewport, y_max: f64) {
    let cfg = &CHART_CONFIG;
    let m = viewport.margins;
    let color = axis_color();
    let stroke = Stroke::new(1.0, color);
    let tick_font = FontId::proportional(cfg.tick_font_size);
    let scales = Scales::with_y_max(y_max, viewport);
    let baseline = viewport.baseline();

    // ---- x axis: months ----
    painter.line_segment(
        [
            to_screen(rect, m.left, baseline),
            to_screen(rect, viewport.width - m.right, baseline),
        ],
        stroke,
    );
    for tick in month_ticks() {
        let x = scales.x.apply(tick.value);
        painter.line_segment(
            [
                to_screen(rect, x, baseline),
                to_screen(rect, x, baseline + cfg.tick_length),
            ],
            stroke,
        );
        painter.text(
            to_screen(rect, x, baseline + cfg.tick_length + 2.0),
            Align2::CENTER_TOP,
            tick.label,
            tick_font.clone(),
            color,
        );
    }

    // ---- y axis: values ----
    painter.line_segment(
        [
            to_screen(rect, m.left, m.top),
            to_screen(rect, m.left, baseline),
        ],
        stroke,
    );
    for tick in value_ticks(y_max, cfg.y_tick_count) {
        let y = scales.y.apply(tick.value);
        painter.line_segment(
            [
                to_screen(rect, m.left - cfg.tick_length, y),
                to_screen(rect, m.left, y),
            ],
            stroke,
        );
        painter.text(
            to_screen(rect, m.left - cfg.tick_length - 3.0, y),
            Align2::RIGHT_CENTER,
            tick.label,
            tick_font.clone(),
            color,
        );
    }

    // ---- axis titles ----
    let label_font = FontId::proportional(cfg.label_font_size);
    painter.text(
        to_screen(rect, viewport.width / 2.0, viewport.height - m.bottom / 2.0),
        Align2::CENTER_CENTER,
        cfg.x_axis_label,
        label_font.clone(),
        color,
    );
    paint_vertical_label(
        painter,
        to_screen(rect, m.left / 2.0, viewport.height / 2.0),
        cfg.y_axis_label,
        label_font,
        color,
    );
}

/// Text rotated a quarter turn counter-clockwise, centred on `center`.
fn paint_vertical_label(painter: &Painter, center: Pos2, text: &str, font: FontId, color: Color32) {
    let galley = painter.layout_no_wrap(text.to_string(), font, color);
    let size = galley.size();
    // Rotation pivots on the galley's top-left corner.
    let pos = Pos2::new(center.x - size.y / 2.0, center.y + size.x / 2.0);
    painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
}
