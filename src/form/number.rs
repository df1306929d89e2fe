//! Lenient number parsing for form values.
//!
//! Form inputs arrive as strings. They are read the way a browser script reads
//! them: the longest numeric prefix wins and trailing garbage is ignored, so
//! `"20 tahun"` is an age of 20 while `"tahun"` is not a number at all.

/// Parse an integer prefix (`parseInt` without an explicit radix).
///
/// Leading whitespace is skipped, a single `+` or `-` is accepted and a
/// `0x`/`0X` prefix switches to hexadecimal. Returns `None` when no digit
/// follows.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start();

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let mut value = 0.0_f64;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * f64::from(radix) + f64::from(d);
                seen_digit = true;
            }
            None => break,
        }
    }

    if !seen_digit {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// Parse a decimal floating point prefix (`parseFloat`).
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent and the literal `Infinity`. Returns `None` when the input does
/// not start with a number.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Insert `,` thousands separators into the integer part of a number.
///
/// ```
/// use mhcheck::form::number::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(-1234.5), "-1,234.5");
/// ```
pub fn format_number(value: impl std::fmt::Display) -> String {
    let text = value.to_string();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
