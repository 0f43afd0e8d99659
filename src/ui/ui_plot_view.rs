use eframe::egui::{RichText, Ui};
use egui_plot::{Corner, Legend, Plot};
use serde::{Deserialize, Serialize};

use crate::models::{ChartLayout, ChartSpec};
use crate::ui::plot_layers::{
    AnnotationLayer, CurveLayer, DayLabelLayer, LayerContext, MarkerLayer, PieLayer, PlotLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::UI_CONFIG;

/// Which optional layers the user wants drawn. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotVisibility {
    pub curve_markers: bool,
    pub day_labels: bool,
    pub annotations: bool,
    pub legend: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            curve_markers: true,
            day_labels: true,
            annotations: true,
            legend: true,
        }
    }
}

/// Padding around the unit pie so pulled slices and labels stay on screen.
const PIE_VIEW_EXTENT: f64 = 1.25;

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    /// Draws one chart. `height` None fills the remaining space.
    pub fn show_chart(
        &self,
        ui: &mut Ui,
        spec: &ChartSpec,
        visibility: &PlotVisibility,
        height: Option<f32>,
    ) {
        ui.label(
            RichText::new(&spec.title)
                .heading()
                .color(UI_CONFIG.colors.heading),
        );

        match &spec.layout {
            ChartLayout::Cartesian { x_axis, y_axis } => {
                self.show_cartesian(ui, spec, visibility, height, x_axis, y_axis)
            }
            ChartLayout::Radial { hole_ratio } => {
                self.show_radial(ui, spec, visibility, height, *hole_ratio)
            }
        }
    }

    fn show_cartesian(
        &self,
        ui: &mut Ui,
        spec: &ChartSpec,
        visibility: &PlotVisibility,
        height: Option<f32>,
        x_axis: &str,
        y_axis: &str,
    ) {
        let day_label = UI_TEXT.plot_hover_day.clone();
        let mut plot = Plot::new(spec.id.as_str())
            .x_axis_label(x_axis)
            .y_axis_label(y_axis)
            .include_y(0.0)
            .allow_scroll(false)
            .label_formatter(move |name, value| {
                let prefix = if name.is_empty() {
                    String::new()
                } else {
                    format!("{}\n", name)
                };
                format!("{}{} {:.1}: {:.0}", prefix, day_label, value.x, value.y)
            });

        if visibility.legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }
        if let Some(h) = height {
            plot = plot.height(h);
        }

        plot.show(ui, |plot_ui| {
            let ctx = LayerContext {
                spec,
                visibility,
                hole_ratio: 0.0,
            };

            // --- LAYER STACK ---
            let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(4);
            layers.push(Box::new(CurveLayer));
            if visibility.day_labels {
                layers.push(Box::new(DayLabelLayer));
            }
            // MARKERS ON TOP OF THE CURVE
            layers.push(Box::new(MarkerLayer));
            if visibility.annotations {
                layers.push(Box::new(AnnotationLayer));
            }

            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
    }

    fn show_radial(
        &self,
        ui: &mut Ui,
        spec: &ChartSpec,
        visibility: &PlotVisibility,
        height: Option<f32>,
        hole_ratio: f64,
    ) {
        let mut plot = Plot::new(spec.id.as_str())
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .include_x(-PIE_VIEW_EXTENT)
            .include_x(PIE_VIEW_EXTENT)
            .include_y(-PIE_VIEW_EXTENT)
            .include_y(PIE_VIEW_EXTENT);

        if visibility.legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }
        if let Some(h) = height {
            plot = plot.height(h);
        }

        plot.show(ui, |plot_ui| {
            let ctx = LayerContext {
                spec,
                visibility,
                hole_ratio,
            };
            PieLayer.render(plot_ui, &ctx);
        });
    }
}
