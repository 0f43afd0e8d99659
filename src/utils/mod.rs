mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{AppInstant, format_micros};

pub(crate) use maths_utils::{argmax, linspace, normalize_sum, solve_linear_system};
