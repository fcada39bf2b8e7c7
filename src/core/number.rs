//! Text <-> number conversion for operands.
//!
//! Operands are kept as text so the bottom display line shows exactly what
//! was typed. These helpers turn that text into `f64` for arithmetic and
//! render results back into canonical text.

/// Magnitude at or above which results use exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results use exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse operand text into a number.
///
/// Empty text and a lone `"."` are partial entries and read as `0`. The
/// literals `Infinity`, `-Infinity` and `NaN` produced by [`format_number`]
/// read back as themselves. Anything else that is not a number (such as the
/// divide-by-zero message) reads as `NaN`.
///
/// # Example
///
/// ```rust
/// use tally::core::parse_operand;
///
/// assert_eq!(parse_operand("3.5"), 3.5);
/// assert_eq!(parse_operand("."), 0.0);
/// assert_eq!(parse_operand("7."), 7.0);
/// assert!(parse_operand("not a number").is_nan());
/// ```
pub fn parse_operand(text: &str) -> f64 {
    match text {
        "" | "." => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => text.parse().unwrap_or(f64::NAN),
    }
}

/// Render a number as canonical text.
///
/// Uses the shortest representation that round-trips: whole numbers carry
/// no fraction, negative zero prints as `0`, and very large or very small
/// magnitudes switch to exponent form with an explicit exponent sign.
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(12.0), "12");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

/// Normalize a typed entry before it takes part in a computation.
///
/// Strips a single trailing decimal point, then re-renders the value
/// through [`format_number`] so `"3."` becomes `"3"` and `"2.50"` becomes
/// `"2.5"`.
pub fn normalize_entry(entry: &str) -> String {
    let trimmed = entry.strip_suffix('.').unwrap_or(entry);
    format_number(parse_operand(trimmed))
}
