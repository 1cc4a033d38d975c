//! Time display formatting for the transport bar.

/// Format a second count as `M:SS` for the transport display.
///
/// Floor-based: `125.0` renders as `"2:05"`, `59.9` as `"0:59"`. Minutes do
/// not roll over into hours (`3725.0` renders as `"62:05"`). Non-finite or
/// negative input renders as `"0:00"`.
pub fn display_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(display_time(125.0), "2:05");
    }

    #[test]
    fn test_fractional_seconds_floor() {
        assert_eq!(display_time(59.9), "0:59");
    }

    #[test]
    fn test_zero() {
        assert_eq!(display_time(0.0), "0:00");
    }

    #[test]
    fn test_no_hour_rollover() {
        assert_eq!(display_time(3725.0), "62:05");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(display_time(-5.0), "0:00");
        assert_eq!(display_time(f64::NAN), "0:00");
        assert_eq!(display_time(f64::INFINITY), "0:00");
    }
}
