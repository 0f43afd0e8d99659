/// Monotonic clock that also works on wasm32.
pub type AppInstant = web_time::Instant;

/// Formats an elapsed time in microseconds for log lines.
pub fn format_micros(micros: u128) -> String {
    if micros < 1_000 {
        format!("{}us", micros)
    } else {
        format!("{:.3}ms", micros as f64 / 1000.0)
    }
}
