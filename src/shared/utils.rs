//! Utility functions and helpers

/// Calculate percentage change, 0 when the old value is not positive
pub fn calculate_percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value > 0.0 {
        ((new_value - old_value) / old_value) * 100.0
    } else {
        0.0
    }
}

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp a normalized factor into [0, 1]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Format a chaos amount without trailing zeros
pub fn format_chaos(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_change() {
        assert_eq!(calculate_percentage_change(100.0, 120.0), 20.0);
        assert_eq!(calculate_percentage_change(0.0, 120.0), 0.0);
        assert_eq!(calculate_percentage_change(-5.0, 120.0), 0.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(67.5), 67.5);
        assert_eq!(round_to_tenth(55.54), 55.5);
        assert_eq!(round_to_tenth(55.56), 55.6);
    }

    #[test]
    fn test_round_to_tenth_exact_half() {
        // 45.25 is exact in binary, so this is a true tie
        assert_eq!(round_to_tenth(45.25), 45.3);
        assert_eq!(round_to_tenth(-45.25), -45.3);
    }

    #[test]
    fn test_format_chaos() {
        assert_eq!(format_chaos(100.0), "100");
        assert_eq!(format_chaos(12.5), "12.5");
        assert_eq!(format_chaos(0.333), "0.33");
    }
}
