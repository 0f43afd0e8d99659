use eframe::egui::{
    CentralPanel, Context, Grid, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::{
    analysis::SalesSummary,
    app::{App, AppState, ChartView},
    charts::format_sales,
    config::PLOT_CONFIG,
    engine::Dashboard,
    ui::{
        UI_CONFIG,
        styles::{UiStyleExt, colored_subsection_heading},
        ui_text::{ICON_CHART, ICON_OVERVIEW, ICON_PIE, ICON_WARNING, UI_TEXT},
    },
};

fn view_icon(view: ChartView) -> &'static str {
    match view {
        ChartView::Overview => ICON_OVERVIEW,
        ChartView::DailySales => ICON_CHART,
        ChartView::CategoryShare => ICON_PIE,
    }
}

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. VIEW SELECTION
                    ui.label(&UI_TEXT.tb_view);
                    let mut selected = self.view;
                    for view in ChartView::iter() {
                        ui.selectable_value(
                            &mut selected,
                            view,
                            format!("{} {}", view_icon(view), view),
                        );
                    }
                    if selected != self.view {
                        self.set_view(selected, "toolbar");
                    }

                    ui.separator();

                    // 2. LAYER VISIBILITY
                    ui.checkbox(
                        &mut self.plot_visibility.curve_markers,
                        &UI_TEXT.tb_curve_markers,
                    );
                    ui.checkbox(&mut self.plot_visibility.day_labels, &UI_TEXT.tb_day_labels);
                    ui.checkbox(
                        &mut self.plot_visibility.annotations,
                        &UI_TEXT.tb_annotations,
                    );
                    ui.checkbox(&mut self.plot_visibility.legend, &UI_TEXT.tb_legend);

                    ui.separator();

                    ui.checkbox(&mut self.show_summary, &UI_TEXT.tb_summary);
                });
            });
    }

    pub(crate) fn render_side_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::left("summary_panel")
            .min_width(180.0)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.sp_heading)
                        .heading()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(6.0);

                let Some(dashboard) = self.dashboard() else {
                    ui.label_subdued(&UI_TEXT.cp_building);
                    return;
                };

                ScrollArea::vertical().show(ui, |ui| {
                    render_summary_grid(ui, &dashboard.summary);
                    ui.add_space(12.0);
                    ui.label(colored_subsection_heading(&UI_TEXT.sp_categories));
                    render_category_list(ui, dashboard);
                });
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(&UI_TEXT.app_title);
                    ui.separator();
                    match &self.state {
                        AppState::Building => ui.label_subdued(&UI_TEXT.cp_building),
                        AppState::Failed(_) => {
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    ICON_WARNING, UI_TEXT.cp_build_failed
                                ))
                                .small()
                                .color(UI_CONFIG.colors.error),
                            );
                        }
                        AppState::Ready(dashboard) => {
                            let elements: usize =
                                dashboard.charts().iter().map(|c| c.elements.len()).sum();
                            ui.label_subdued(format!(
                                "{} {}",
                                dashboard.curve.len(),
                                UI_TEXT.sb_samples
                            ));
                            ui.separator();
                            ui.label_subdued(format!("{} {}", elements, UI_TEXT.sb_elements));
                        }
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| match &self.state {
                AppState::Building => render_fullscreen_message(
                    ui,
                    &UI_TEXT.cp_building,
                    &UI_TEXT.cp_building_body,
                    false,
                ),
                AppState::Failed(err) => {
                    render_fullscreen_message(ui, &UI_TEXT.cp_build_failed, err, true)
                }
                AppState::Ready(dashboard) => match self.view {
                    ChartView::Overview => {
                        ScrollArea::vertical().show(ui, |ui| {
                            let height = Some(UI_CONFIG.overview_plot_height);
                            self.plot_view.show_chart(
                                ui,
                                &dashboard.line_chart,
                                &self.plot_visibility,
                                height,
                            );
                            ui.add_space(12.0);
                            self.plot_view.show_chart(
                                ui,
                                &dashboard.pie_chart,
                                &self.plot_visibility,
                                height,
                            );
                        });
                    }
                    ChartView::DailySales => self.plot_view.show_chart(
                        ui,
                        &dashboard.line_chart,
                        &self.plot_visibility,
                        None,
                    ),
                    ChartView::CategoryShare => self.plot_view.show_chart(
                        ui,
                        &dashboard.pie_chart,
                        &self.plot_visibility,
                        None,
                    ),
                },
            });
    }
}

fn render_summary_grid(ui: &mut Ui, summary: &SalesSummary) {
    let neutral = UI_CONFIG.colors.text_neutral;
    let lowest = summary
        .extrema
        .min_days()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.metric(&UI_TEXT.sp_days, &summary.days.to_string(), neutral);
            ui.end_row();
            ui.metric(&UI_TEXT.sp_total, &format_sales(summary.total), neutral);
            ui.end_row();
            ui.metric(&UI_TEXT.sp_mean, &format!("{:.1}", summary.mean), neutral);
            ui.end_row();
            ui.metric(&UI_TEXT.sp_median, &format_sales(summary.median), neutral);
            ui.end_row();
            ui.metric(&UI_TEXT.sp_std_dev, &format!("{:.1}", summary.std_dev), neutral);
            ui.end_row();
            ui.metric(
                &UI_TEXT.sp_peak,
                &format!(
                    "{} (day {})",
                    format_sales(summary.extrema.max().value),
                    summary.extrema.max().day
                ),
                PLOT_CONFIG.max_marker_color.into(),
            );
            ui.end_row();
            ui.metric(
                &UI_TEXT.sp_lowest,
                &format!(
                    "{} (days {})",
                    format_sales(summary.extrema.min_value()),
                    lowest
                ),
                PLOT_CONFIG.min_marker_color.into(),
            );
            ui.end_row();
        });
}

fn render_category_list(ui: &mut Ui, dashboard: &Dashboard) {
    Grid::new("category_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for slice in dashboard.pie_chart.slices() {
                ui.metric(
                    &slice.label,
                    &format!(
                        "{} ({:.1}%)",
                        format_sales(slice.value),
                        slice.fraction * 100.0
                    ),
                    slice.color.into(),
                );
                ui.end_row();
            }
        });
}

fn render_fullscreen_message(ui: &mut Ui, title: &str, subtitle: &str, is_error: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        if is_error {
            ui.heading(format!("{} {}", ICON_WARNING, title));
        } else {
            ui.spinner();
            ui.add_space(12.0);
            ui.heading(title);
        }

        ui.add_space(6.0);

        let color = if is_error {
            UI_CONFIG.colors.error
        } else {
            UI_CONFIG.colors.text_neutral
        };

        ui.label(RichText::new(subtitle).color(color));
    });
}
