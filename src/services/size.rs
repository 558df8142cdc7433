use regex::Regex;

lazy_static::lazy_static! {
    static ref SIZE: Regex = Regex::new(r"^([0-9]+) ?(?:([KkMmGgTtPp])[Bb]?)?$")
        .expect("size regex is valid");
}

/// Converts "100M", "2 GB" or "500" into bytes (binary multiples). Anything
/// else, including fractions like "1.5G", is 0.
pub fn size_to_bytes(size: &str) -> u64 {
    let size = size.trim();
    let Some(captures) = SIZE.captures(size) else {
        return 0;
    };
    let Ok(value) = captures[1].parse::<u64>() else {
        return 0;
    };
    let exponent = match captures.get(2).map(|unit| unit.as_str().to_ascii_uppercase()) {
        Some(unit) => match unit.as_str() {
            "K" => 1,
            "M" => 2,
            "G" => 3,
            "T" => 4,
            "P" => 5,
            _ => 0,
        },
        None => 0,
    };
    1024_u64
        .checked_pow(exponent)
        .and_then(|multiplier| value.checked_mul(multiplier))
        .unwrap_or(0)
}

/// Minimum title length for makemkvcon in whole seconds. Accepts plain
/// seconds ("3600") or a duration ("1h 30m"). Unparseable input is `None`.
pub fn parse_min_length(min_length: &str) -> Option<u64> {
    let min_length = min_length.trim();
    if min_length.is_empty() {
        return None;
    }
    match min_length.parse::<u64>() {
        Ok(seconds) => Some(seconds),
        Err(_) => humantime::parse_duration(min_length)
            .ok()
            .map(|duration| duration.as_secs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number_is_bytes() {
        assert_eq!(size_to_bytes("500"), 500);
        assert_eq!(size_to_bytes("0"), 0);
    }

    #[test]
    fn test_units() {
        assert_eq!(size_to_bytes("100M"), 100 * 1024 * 1024);
        assert_eq!(size_to_bytes("100MB"), 100 * 1024 * 1024);
        assert_eq!(size_to_bytes("100 mb"), 100 * 1024 * 1024);
        assert_eq!(size_to_bytes("2k"), 2048);
        assert_eq!(size_to_bytes("3G"), 3 * 1024 * 1024 * 1024);
        assert_eq!(size_to_bytes("1T"), 1024_u64.pow(4));
        assert_eq!(size_to_bytes("1p"), 1024_u64.pow(5));
        assert_eq!(size_to_bytes(" 4G "), 4 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_rejected_formats() {
        assert_eq!(size_to_bytes("1.5G"), 0);
        assert_eq!(size_to_bytes(""), 0);
        assert_eq!(size_to_bytes("G"), 0);
        assert_eq!(size_to_bytes("10X"), 0);
        assert_eq!(size_to_bytes("10  M"), 0);
        assert_eq!(size_to_bytes("10B"), 0);
        assert_eq!(size_to_bytes("-10M"), 0);
    }

    #[test]
    fn test_overflow_is_zero() {
        assert_eq!(size_to_bytes("99999999999999999999"), 0);
        assert_eq!(size_to_bytes("99999999P"), 0);
    }

    #[test]
    fn test_parse_min_length() {
        assert_eq!(parse_min_length("3600"), Some(3600));
        assert_eq!(parse_min_length("45m"), Some(2700));
        assert_eq!(parse_min_length("1h 30m"), Some(5400));
        assert_eq!(parse_min_length(""), None);
        assert_eq!(parse_min_length("soon"), None);
    }
}
