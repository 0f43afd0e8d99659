// src/app/state.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::engine::Dashboard;

/// Which chart(s) the central panel shows.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum ChartView {
    /// Both charts stacked
    #[default]
    #[strum(to_string = "Overview")]
    Overview,
    #[strum(to_string = "Daily Sales")]
    DailySales,
    #[strum(to_string = "Category Share")]
    CategoryShare,
}

#[derive(Default)]
pub(crate) enum AppState {
    #[default]
    Building,
    Ready(Box<Dashboard>),
    Failed(String),
}

impl AppState {
    pub(crate) fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            AppState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn views_list_in_toolbar_order() {
        let names: Vec<String> = ChartView::iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["Overview", "Daily Sales", "Category Share"]);
    }

    #[test]
    fn app_starts_out_building() {
        let state = AppState::default();
        assert!(matches!(state, AppState::Building));
        assert!(state.dashboard().is_none());
    }

    #[test]
    fn cli_names_are_kebab_case() {
        use clap::ValueEnum;
        let view = <ChartView as ValueEnum>::from_str("category-share", false).unwrap();
        assert_eq!(view, ChartView::CategoryShare);
    }
}
