mod core;

pub use core::{Dashboard, DashboardInputs};
