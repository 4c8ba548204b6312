/// rounds a value to some number of decimal digits.
///
/// the rounding is performed on the exact decimal expansion of the binary
/// value with ties going to the even digit, so that 2.675 (stored as
/// 2.67499999...) rounds to 2.67 and 0.125 rounds to 0.12. non-finite values
/// are returned unchanged.
///
/// # Arguments
///
/// * `value`  - number to round
/// * `digits` - decimal digits to keep
///
/// # Returns
///
/// * the nearest f64 to the rounded decimal value
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.digits$}").parse::<f64>().unwrap_or(value)
}

/// writes a coordinate in its shortest round-trip form, in the notation
/// cache keys have always been written with:
///
/// * integral values keep a single trailing decimal ("104.0", not "104")
/// * magnitudes below 1e-4 use an exponent of at least two digits ("1e-05",
///   "-4.5e-05")
pub fn format_coordinate(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value != 0.0 && value.abs() < 1e-4 {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
