/// Utility helpers for the soundboard

/// Format a number of seconds as `MM:SS`.
/// Minutes are not wrapped at 60; non-finite and negative values render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let whole = seconds.floor() as u64;
    let mins = whole / 60;
    let secs = whole % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Convert a click on the progress track into a fraction of its width.
/// `client_x` and `track_left` are both viewport coordinates, so the result
/// doesn't depend on which child element received the click.
/// Returns `None` when the track has no rendered width yet.
pub fn click_fraction(client_x: f64, track_left: f64, track_width: f64) -> Option<f64> {
    if !track_width.is_finite() || track_width <= 0.0 {
        return None;
    }
    let offset_x = client_x - track_left;
    if !offset_x.is_finite() {
        return None;
    }
    Some(offset_x / track_width)
}

/// Capitalise the first character of a clip key for use as button text.
pub fn title_case<S: AsRef<str>>(s: S) -> String {
    let mut chars = s.as_ref().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(125.0), "02:05");
        assert_eq!(format_time(59.999), "00:59");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(6005.4), "100:05");
    }

    #[test]
    fn format_time_handles_invalid_input() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }

    #[test]
    fn format_time_seconds_field_stays_below_sixty() {
        for s in (0..10_000).step_by(7) {
            let out = format_time(s as f64 + 0.5);
            let (mm, ss) = out.split_once(':').unwrap();
            assert!(mm.len() >= 2);
            assert_eq!(ss.len(), 2);
            assert!(ss.parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn click_fraction_requires_rendered_width() {
        assert_eq!(click_fraction(50.0, 0.0, 200.0), Some(0.25));
        assert_eq!(click_fraction(10.0, 0.0, 0.0), None);
        assert_eq!(click_fraction(10.0, 0.0, f64::NAN), None);
    }

    #[test]
    fn click_fraction_is_measured_from_track_left_edge() {
        // Track starts 120px into the viewport and is 400px wide.
        assert_eq!(click_fraction(220.0, 120.0, 400.0), Some(0.25));
        assert_eq!(click_fraction(120.0, 120.0, 400.0), Some(0.0));
        assert_eq!(click_fraction(520.0, 120.0, 400.0), Some(1.0));
        assert_eq!(click_fraction(f64::NAN, 120.0, 400.0), None);
    }

    #[test]
    fn title_case_capitalises_first_letter() {
        assert_eq!(title_case("laugh"), "Laugh");
        assert_eq!(title_case(""), "");
    }
}
