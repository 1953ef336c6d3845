use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct DurationViewModel {
    pub minutes: f64,
    pub formatted: String,
}

impl fmt::Display for DurationViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.formatted)
    }
}
