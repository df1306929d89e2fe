//! Results page navigation target.

use crate::api::PredictionResult;

/// Path of the results page
pub const DEFAULT_RESULTS_PAGE: &str = "/hasil.html";

/// Build the results page URL for a prediction.
///
/// ```
/// use mhcheck::api::PredictionResult;
/// use mhcheck::page::redirect::results_url;
///
/// let result = PredictionResult {
///     prediction_label: "Stressed".to_string(),
///     confidence: 0.87,
/// };
/// assert_eq!(
///     results_url("/hasil.html", &result),
///     "/hasil.html?status=Stressed&confidence=0.87"
/// );
/// ```
pub fn results_url(results_page: &str, result: &PredictionResult) -> String {
    format!(
        "{}?status={}&confidence={}",
        results_page,
        encode_query_value(&result.prediction_label),
        encode_query_value(&result.confidence.to_string())
    )
}

/// Percent-encode a value with the URL query encode set.
///
/// Controls, space, `"`, `#`, `<`, `>`, `'` and every non-ASCII byte are
/// escaped; other characters, including `&` and `=`, pass through unchanged
/// the same way a browser treats a hand-built location string.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        let escape = !(0x21..=0x7e).contains(&byte)
            || matches!(byte, b'"' | b'#' | b'<' | b'>' | b'\'');
        if escape {
            out.push_str(&format!("%{:02X}", byte));
        } else {
            out.push(byte as char);
        }
    }
    out
}
