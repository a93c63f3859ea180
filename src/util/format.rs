/// Largest number of significant digits an `f64` can meaningfully carry.
pub const MAX_SIGNIFICANT_DIGITS: u8 = 17;
/// Default number of significant digits used by the command line.
pub const DEFAULT_SIGNIFICANT_DIGITS: u8 = 10;

/// Formats a value with at most `digits` significant digits.
///
/// Behaves like C's `%.<digits>g`: trailing zeros of the fraction are
/// dropped, and scientific notation is used when the decimal exponent is
/// below `-4` or at least `digits`. Non-finite values print as `inf`, `-inf`
/// and `nan`. `digits` is clamped to `1..=17`.
///
/// # Example
/// ```
/// use calc::util::format::format_significant;
///
/// assert_eq!(format_significant(14.0, 10), "14");
/// assert_eq!(format_significant(std::f64::consts::E, 10), "2.718281828");
/// assert_eq!(format_significant(1.5e20, 10), "1.5e+20");
/// assert_eq!(format_significant(f64::NEG_INFINITY, 10), "-inf");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.clamp(1, usize::from(MAX_SIGNIFICANT_DIGITS));
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    let precision = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}
