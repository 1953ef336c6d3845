/// Truncate a string to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Round a float to the nearest whole number, halves away from zero.
///
/// Saturates at the `i64` range; NaN rounds to zero.
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
