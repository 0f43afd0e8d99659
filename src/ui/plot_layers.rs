use eframe::egui::{Align2, Color32, Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Arrows, Line, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text};

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::{ChartSpec, PieSlice};
use crate::ui::UI_CONFIG;
use crate::ui::styles::apply_opacity;
use crate::ui::ui_plot_view::PlotVisibility;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub spec: &'a ChartSpec,
    pub visibility: &'a PlotVisibility,
    /// Donut hole as a fraction of the radius (radial charts only)
    pub hole_ratio: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CURVE LAYER (Smoothed sales line)
// ============================================================================
pub struct CurveLayer;

impl PlotLayer for CurveLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for curve in ctx.spec.curves() {
            let color = Color32::from(curve.color);

            plot_ui.line(
                Line::new(curve.name.as_str(), PlotPoints::new(curve.points.clone()))
                    .color(color)
                    .width(curve.width),
            );

            if let (Some(radius), true) = (curve.marker_radius, ctx.visibility.curve_markers) {
                // Same name so the legend groups dots with their line
                plot_ui.points(
                    Points::new(curve.name.as_str(), PlotPoints::new(curve.points.clone()))
                        .color(color)
                        .radius(radius)
                        .filled(true),
                );
            }
        }
    }
}

// ============================================================================
// 2. DAY LABEL LAYER (Value above every original point)
// ============================================================================
pub struct DayLabelLayer;

impl PlotLayer for DayLabelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for label in ctx.spec.labels() {
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(label.position[0], label.position[1]),
                    RichText::new(&label.text).small(),
                )
                .color(Color32::from(label.color))
                .anchor(Align2::CENTER_BOTTOM),
            );
        }
    }
}

// ============================================================================
// 3. EXTREMA MARKER LAYER
// ============================================================================
pub struct MarkerLayer;

impl PlotLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for marker in ctx.spec.markers() {
            // Unnamed markers stay out of the legend
            let name = marker.legend.clone().unwrap_or_default();
            plot_ui.points(
                Points::new(name, PlotPoints::new(vec![marker.position]))
                    .color(Color32::from(marker.color))
                    .radius(marker.radius)
                    .filled(true),
            );
        }
    }
}

// ============================================================================
// 4. ANNOTATION LAYER (Arrow + text)
// ============================================================================
pub struct AnnotationLayer;

impl PlotLayer for AnnotationLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for annotation in ctx.spec.annotations() {
            let color = Color32::from(annotation.color);
            let [tx, ty] = annotation.text_position;

            plot_ui.arrows(
                Arrows::new(
                    "",
                    PlotPoints::new(vec![annotation.text_position]),
                    PlotPoints::new(vec![annotation.target]),
                )
                .color(color)
                .tip_length(8.0),
            );

            // Keep the text on the far side of the arrow tail
            let anchor = if ty >= annotation.target[1] {
                Align2::LEFT_BOTTOM
            } else {
                Align2::LEFT_TOP
            };
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(tx, ty),
                    RichText::new(&annotation.text).strong(),
                )
                .color(color)
                .anchor(anchor),
            );
        }
    }
}

// ============================================================================
// 5. PIE LAYER (Wedges, percent labels, hover)
// ============================================================================
pub struct PieLayer;

impl PlotLayer for PieLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let inner = ctx.hole_ratio.clamp(0.0, 0.95);
        let mut start = 0.0;

        for slice in ctx.spec.slices() {
            let sweep = slice.fraction * TAU;
            let wedge = Wedge::new(start, sweep, slice.pull, inner);
            draw_wedge(plot_ui, slice, &wedge);

            if slice.fraction > 0.0 {
                let (lx, ly) = wedge.point_at(wedge.mid_angle(), (1.0 + inner) / 2.0);
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(lx, ly),
                        RichText::new(format!("{:.1}%", slice.fraction * 100.0)).strong(),
                    )
                    .color(Color32::WHITE),
                );
            }

            if let Some(pointer) = plot_ui.pointer_coordinate() {
                if wedge.contains(pointer.x, pointer.y) {
                    show_slice_tooltip(plot_ui, slice);
                }
            }

            start += sweep;
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

/// Annular sector measured clockwise from 12 o'clock, unit outer radius.
struct Wedge {
    start: f64,
    sweep: f64,
    inner: f64,
    center: (f64, f64),
}

impl Wedge {
    fn new(start: f64, sweep: f64, pull: f64, inner: f64) -> Self {
        let mut wedge = Self {
            start,
            sweep,
            inner,
            center: (0.0, 0.0),
        };
        if pull > 0.0 {
            wedge.center = wedge.point_at(wedge.mid_angle(), pull);
        }
        wedge
    }

    fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }

    /// Point at clockwise `angle` from the top, `radius` from this wedge's centre.
    fn point_at(&self, angle: f64, radius: f64) -> (f64, f64) {
        let theta = FRAC_PI_2 - angle;
        (
            self.center.0 + radius * theta.cos(),
            self.center.1 + radius * theta.sin(),
        )
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.center.0, y - self.center.1);
        let r = dx.hypot(dy);
        if r < self.inner || r > 1.0 {
            return false;
        }
        let angle = (FRAC_PI_2 - dy.atan2(dx)).rem_euclid(TAU);
        angle >= self.start && angle < self.start + self.sweep
    }
}

fn draw_wedge(plot_ui: &mut PlotUi, slice: &PieSlice, wedge: &Wedge) {
    if wedge.sweep <= 0.0 {
        return;
    }

    let color = Color32::from(slice.color);
    let steps = ((wedge.sweep / TAU) * UI_CONFIG.pie_arc_resolution as f64).ceil() as usize;
    let steps = steps.max(2);

    // Quads between consecutive arc samples are convex, so they fill correctly
    for i in 0..steps {
        let a0 = wedge.start + wedge.sweep * i as f64 / steps as f64;
        let a1 = wedge.start + wedge.sweep * (i + 1) as f64 / steps as f64;
        let (ox0, oy0) = wedge.point_at(a0, 1.0);
        let (ox1, oy1) = wedge.point_at(a1, 1.0);
        let (ix1, iy1) = wedge.point_at(a1, wedge.inner);
        let (ix0, iy0) = wedge.point_at(a0, wedge.inner);

        plot_ui.polygon(
            Polygon::new(
                slice.label.as_str(),
                PlotPoints::new(vec![[ox0, oy0], [ox1, oy1], [ix1, iy1], [ix0, iy0]]),
            )
            .fill_color(color)
            .stroke(Stroke::new(1.0, apply_opacity(color, 0.9))),
        );
    }
}

fn show_slice_tooltip(plot_ui: &mut PlotUi, slice: &PieSlice) {
    let tooltip_layer = LayerId::new(Tooltip, Id::new("pie_tooltips"));
    let color = Color32::from(slice.color);

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new(format!("tooltip_{}", slice.label)),
        |ui: &mut Ui| {
            ui.label(RichText::new(&slice.label).strong().color(color));
            ui.separator();
            ui.label(&slice.hover);
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wedge_starts_at_twelve_oclock() {
        let wedge = Wedge::new(0.0, TAU / 4.0, 0.0, 0.3);
        let (x, y) = wedge.point_at(0.0, 1.0);
        assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
        // Clockwise: a quarter turn lands at 3 o'clock
        let (x, y) = wedge.point_at(TAU / 4.0, 1.0);
        assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn hit_test_respects_hole_and_sweep() {
        let wedge = Wedge::new(0.0, TAU / 4.0, 0.0, 0.3);
        assert!(wedge.contains(0.5, 0.5));
        assert!(!wedge.contains(0.1, 0.1)); // inside the hole
        assert!(!wedge.contains(-0.5, 0.5)); // other quadrant
        assert!(!wedge.contains(2.0, 2.0)); // outside the ring
    }

    #[test]
    fn pulled_wedge_moves_along_its_bisector() {
        let wedge = Wedge::new(0.0, TAU / 4.0, 0.1, 0.0);
        let (cx, cy) = wedge.center;
        assert!(cx > 0.0 && cy > 0.0);
        assert!((cx - cy).abs() < 1e-12);
        assert!((cx.hypot(cy) - 0.1).abs() < 1e-12);
    }
}
