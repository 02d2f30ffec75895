//! Formatting helpers for command-line output.

/// Format millidegrees Celsius with one decimal: `45000` → `"45.0°C"`.
pub fn format_millicelsius(millicelsius: i64) -> String {
    let sign = if millicelsius < 0 { "-" } else { "" };
    let abs = millicelsius.unsigned_abs();
    format!("{}{}.{}°C", sign, abs / 1000, (abs % 1000) / 100)
}

/// Format the zone `mode`: `"enabled"`, `"disabled"` or `"-"` when absent.
pub fn format_mode(mode: Option<bool>) -> &'static str {
    match mode {
        Some(true) => "enabled",
        Some(false) => "disabled",
        None => "-",
    }
}

/// Format the passive trip point: `"-"` when absent, `"off"` for 0.
pub fn format_passive(passive: Option<u64>) -> String {
    match passive {
        None => "-".to_string(),
        Some(0) => "off".to_string(),
        Some(v) => format_millicelsius(i64::try_from(v).unwrap_or(i64::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millicelsius() {
        assert_eq!(format_millicelsius(45000), "45.0°C");
        assert_eq!(format_millicelsius(52375), "52.3°C");
        assert_eq!(format_millicelsius(0), "0.0°C");
        assert_eq!(format_millicelsius(-5000), "-5.0°C");
        assert_eq!(format_millicelsius(-500), "-0.5°C");
    }

    #[test]
    fn test_format_mode() {
        assert_eq!(format_mode(Some(true)), "enabled");
        assert_eq!(format_mode(Some(false)), "disabled");
        assert_eq!(format_mode(None), "-");
    }

    #[test]
    fn test_format_passive() {
        assert_eq!(format_passive(None), "-");
        assert_eq!(format_passive(Some(0)), "off");
        assert_eq!(format_passive(Some(95000)), "95.0°C");
    }
}
