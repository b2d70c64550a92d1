//! Cell formatting.

/// Cell marker for a file without valid data.
pub const NOT_AVAILABLE: &str = "#N/A";

/// Renders a float as the shortest decimal that round-trips.
///
/// Integral values keep a trailing `.0` (`3.0`). Magnitudes of `1e16` and above
/// or below `1e-4` use exponent notation with a signed, two-digit exponent
/// (`1e+16`, `2.5e-07`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_notation(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn exponent_notation(value: f64) -> String {
    let plain = format!("{value:e}");
    match plain.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_decimal_point() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-12.0), "-12.0");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn fractional_values_use_shortest_repr() {
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(1.25_f64.sqrt()), "1.118033988749895");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(0.0001), "0.0001");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e20), "1.5e+20");
        assert_eq!(format_float(2.5e-7), "2.5e-07");
        assert_eq!(format_float(-3e-5), "-3e-05");
        assert_eq!(format_float(1e100), "1e+100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}
