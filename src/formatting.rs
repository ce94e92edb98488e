/// Shown in place of a value that is not finite.
pub const NOT_A_NUMBER: &str = "—";

/// More decimals than an f64 can distinguish.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Rounds to at most `fraction_digits` decimals and drops trailing zeros.
pub fn format_number(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.into();
    }

    let fixed = format!("{:.*}", fraction_digits.min(MAX_FRACTION_DIGITS), value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".into()
    } else {
        trimmed.into()
    }
}
