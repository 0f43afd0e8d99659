use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::{AppState, ChartView},
    config::{DF, SAMPLE_COUNT},
    data::sample_inputs,
    engine::Dashboard,
    ui::{PlotView, PlotVisibility, UI_CONFIG},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) view: ChartView, // persists across sessions.
    pub(crate) plot_visibility: PlotVisibility,
    pub(crate) show_summary: bool,
    #[serde(skip)]
    pub(crate) sample_count: usize,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    pub(crate) state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            view: ChartView::default(),
            plot_visibility: PlotVisibility::default(),
            show_summary: true,
            sample_count: SAMPLE_COUNT,
            plot_view: PlotView::new(),
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.plot_view = PlotView::new();
        app.state = AppState::Building;
        app.sample_count = args.samples;

        // Command line beats the persisted view
        if let Some(view) = args.view {
            app.set_view(view, "command line");
        }

        app
    }

    pub(crate) fn set_view(&mut self, view: ChartView, _reason: &str) {
        if self.view == view {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_view_selection {
            log::info!("VIEW SET to {} (was {}) because {}", view, self.view, _reason);
        }
        self.view = view;
    }

    pub(crate) fn dashboard(&self) -> Option<&Dashboard> {
        self.state.dashboard()
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut requested = None;
        ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                requested = Some(ChartView::Overview);
            }
            if i.key_pressed(Key::Num2) {
                requested = Some(ChartView::DailySales);
            }
            if i.key_pressed(Key::Num3) {
                requested = Some(ChartView::CategoryShare);
            }
            if i.key_pressed(Key::L) {
                self.plot_visibility.legend = !self.plot_visibility.legend;
            }
            if i.key_pressed(Key::A) {
                self.plot_visibility.annotations = !self.plot_visibility.annotations;
            }
            if i.key_pressed(Key::S) {
                self.show_summary = !self.show_summary;
            }
        });
        if let Some(view) = requested {
            self.set_view(view, "keyboard shortcut");
        }
    }

    /// Single initialization pass. Failures become a visible state.
    fn build_dashboard(&self) -> AppState {
        let result = sample_inputs().and_then(|inputs| Dashboard::build(&inputs, self.sample_count));
        match result {
            Ok(dashboard) => AppState::Ready(Box::new(dashboard)),
            Err(e) => {
                log::error!("Dashboard build failed: {}", e);
                AppState::Failed(e.to_string())
            }
        }
    }

    fn render_frame(&mut self, ctx: &Context) {
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        if self.show_summary {
            self.render_side_panel(ctx);
        }
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        // Draw first, so the placeholder gets one frame before the build runs
        self.render_frame(ctx);
        if matches!(self.state, AppState::Building) {
            self.state = self.build_dashboard();
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_view_selection {
            log::info!("💾 SAVE [App]: view = {}", self.view);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
