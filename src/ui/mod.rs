mod plot_layers;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_plot_view::{PlotView, PlotVisibility};

pub use ui_text::{UI_TEXT, UiText};
