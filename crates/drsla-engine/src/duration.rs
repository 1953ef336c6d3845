const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;
const MINUTES_PER_DAY: u64 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// Human-readable span for a minute count: `45 min`, `2h 5m`, `3d 4h`.
///
/// The total is rounded to the smallest shown unit before it is split, so a
/// rounded remainder never reads as a full larger unit. Zero remainders are
/// omitted. Negative and NaN input read as zero.
pub fn format_duration(minutes: f64) -> String {
    let minutes = if minutes.is_nan() { 0.0 } else { minutes.max(0.0) };

    let total_minutes = minutes.round() as u64;
    if total_minutes < MINUTES_PER_HOUR {
        return format!("{} min", total_minutes);
    }

    if total_minutes < MINUTES_PER_DAY {
        let hours = total_minutes / MINUTES_PER_HOUR;
        let rest = total_minutes % MINUTES_PER_HOUR;
        return if rest == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, rest)
        };
    }

    let total_hours = (minutes / MINUTES_PER_HOUR as f64).round() as u64;
    let days = total_hours / HOURS_PER_DAY;
    let hours = total_hours % HOURS_PER_DAY;
    if hours == 0 {
        format!("{}d", days)
    } else {
        format!("{}d {}h", days, hours)
    }
}
