use std::borrow::Cow;

use rusqlite::types::ValueRef;

/// Render a `SQLite` value the way the engine's text-mode row callback does.
///
/// Text borrows straight from the row buffer, so callers must copy before the
/// row advances. NULL stays `None`.
#[must_use]
pub fn value_as_text(value: ValueRef<'_>) -> Option<Cow<'_, str>> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(Cow::Owned(i.to_string())),
        ValueRef::Real(f) => Some(Cow::Owned(format_real(f))),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes)),
    }
}

/// Format a real the way `SQLite` renders it as text (`%!.15g`).
///
/// # Arguments
///
/// * `value` - The real to render
///
/// # Returns
///
/// At most 15 significant digits. Exponent form (`1.0e+20`, `1.0e-07`) is used
/// when the decimal exponent is below -4 or at least 15, fixed form otherwise.
/// An integral mantissa always keeps a `.0`, and negative zero prints as `0.0`.
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Inf" } else { "-Inf" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // 15 significant digits, rounded once
    let scientific = format!("{value:.14e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    if !(-4..15).contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{lead}.{rest}e{exp_sign}{:02}", exponent.unsigned_abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exponent.unsigned_abs() as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac_part}")
    }
}
