//! Small numeric helpers: interpolation, easing and lenient CSS number parsing.

#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Linear interpolation for `t` in \[0, 1\]. The result never leaves the
/// `a..=b` span and `t >= 1` lands on `b` exactly.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return b;
    }
    clamp(a + (b - a) * t, a.min(b), a.max(b))
}

/// Quadratic ease-in-out over `t` in \[0, 1\].
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Parse the leading number of a computed style value.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `" 0.3em"` yields `0.3`. Returns `None` when no digits lead the value.
pub fn parse_css_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse::<f64>().ok();
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let mut literal = s[..end].to_string();
    // "5." and ".5" are fine for JS but Rust wants a digit on both sides
    if literal.ends_with('.') {
        literal.push('0');
    }
    if let Some(rest) = literal.strip_prefix('.') {
        literal = format!("0.{rest}");
    } else if let Some(rest) = literal.strip_prefix("-.") {
        literal = format!("-0.{rest}");
    } else if let Some(rest) = literal.strip_prefix("+.") {
        literal = format!("0.{rest}");
    }
    literal.parse::<f64>().ok()
}

/// Parsed value, or `fallback` when the value is missing, unparsable or zero.
#[inline]
pub fn number_or(raw: Option<&str>, fallback: f64) -> f64 {
    match raw.and_then(parse_css_number) {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => fallback,
    }
}
