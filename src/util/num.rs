/// Magnitude from which reals are rendered in exponent form.
pub const EXPONENT_UPPER: f64 = 1e16;
/// Magnitude below which non-zero reals are rendered in exponent form.
pub const EXPONENT_LOWER: f64 = 1e-4;

/// Widens an integer operand to `f64` for mixed arithmetic.
///
/// Integers beyond `2^53` round to the nearest representable real, which is
/// the usual behaviour of mixed integer/real arithmetic.
///
/// ## Example
/// ```
/// use rlite::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Renders a real number for display.
///
/// - Integral values keep one fractional digit so they stay distinguishable
///   from integers (`5.0`).
/// - Very large or very small magnitudes use exponent notation with a signed,
///   two-digit exponent (`1e+16`, `2.5e-05`).
/// - Everything else uses the shortest representation that round-trips.
///
/// ## Example
/// ```
/// use rlite::util::num::format_real;
///
/// assert_eq!(format_real(30.0), "30.0");
/// assert_eq!(format_real(2.5), "2.5");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if value != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format_exponent(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Formats `value` as `<mantissa>e<sign><two or more digits>`.
fn format_exponent(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(("+", exponent), |rest| ("-", rest));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => raw,
    }
}
