//! Human-readable rendering of tour totals.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * 60;

/// Formats a distance in meters as kilometers with two decimals.
///
/// ```
/// use waypoint_order::format::format_kilometers;
/// assert_eq!(format_kilometers(2339.5), "2.34 km");
/// ```
pub fn format_kilometers(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Formats a duration in seconds as `HH:MM:SS`, dropping fractional seconds.
///
/// ```
/// use waypoint_order::format::format_hms;
/// assert_eq!(format_hms(3725.9), "01:02:05");
/// ```
pub fn format_hms(seconds: f64) -> String {
    // saturating cast: NaN and negatives become 0
    let total = seconds.max(0.0) as u64;
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
