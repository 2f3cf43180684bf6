//! Version identifier handling.

use regex::Regex;

/// Check a version identifier against an expected prefix.
///
/// This is a plain string-prefix test: `"1.9.2"` matches `"1.9"`, and
/// `"1.10.0"` matches `"1"`. It does not understand numeric ordering, so
/// `"10.0"` also matches `"1"`.
pub fn matches_expected(actual: &str, expected_prefix: &str) -> bool {
    actual.starts_with(expected_prefix)
}

/// Extract a version number from interpreter output such as `Python 2.7.9`.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
