//! Number parsing and rendering shared by every tabular path.

/// Markers read as a missing value, as spreadsheet and dataframe tools do.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if `raw` stands for a missing value.
///
/// Any spelling that parses to NaN (`NAN`, `+nan`, ...) counts as missing too,
/// so NaN never reaches column statistics.
#[must_use]
pub(crate) fn is_missing(raw: &str) -> bool {
    let raw = raw.trim();
    MISSING_MARKERS.contains(&raw) || parse_number(raw).is_some_and(f64::is_nan)
}

/// Parses a cell as a number, ignoring surrounding whitespace.
#[must_use]
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Renders a number for reports and serialized CSV.
///
/// Integral values print without a fractional part, NaN prints as `NaN`
/// and negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
