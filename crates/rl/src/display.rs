//! Remaining-time display collaborator.

/// Receives the formatted remaining orient time. Purely observational.
pub trait TimerDisplay {
    fn show(&mut self, text: &str);
}

/// Two decimals, e.g. `"9.75"`.
pub fn format_remaining(seconds: f32) -> String {
    format!("{seconds:.2}")
}

/// Display that forwards the text to the log.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl TimerDisplay for LogDisplay {
    fn show(&mut self, text: &str) {
        tracing::debug!(remaining = text, "orient timer");
    }
}
