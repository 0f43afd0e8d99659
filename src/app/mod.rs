mod root;
mod state;

pub(crate) use state::AppState;

pub use root::App;
pub use state::ChartView;
