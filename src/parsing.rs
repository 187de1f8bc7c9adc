//! Best-effort parsing of raw CSV fields into numbers.
//!
//! Every function here is total: malformed input yields the documented
//! default (`0`, `0.0` or `(0, 0)`) instead of an error, since the source
//! tables mix locale decimal commas, percent suffixes and stray text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<total>(<wins>)`, e.g. `45(12)`, with optional surrounding whitespace
    static ref COUNT_WINS_PATTERN: Regex =
        Regex::new(r"^\s*(\d+)\s*\((\d+)\)\s*").unwrap();
}

/// Normalize a decimal field: trim and turn a locale comma into a dot.
fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// `NaN` and infinities parse as `f64` but read as `0.0` here.
fn parse_finite(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a percentage such as `"72%"` or `"12,5%"`.
///
/// Returns `0.0` for `None` or anything that does not parse.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = normalize_decimal(raw);
    let s = s.strip_suffix('%').unwrap_or(&s);
    parse_finite(s.trim_end())
}

/// Parse a float with the same normalization as [`parse_percent`] but
/// without stripping a `%` suffix. Returns `0.0` on failure.
pub fn parse_float(raw: Option<&str>) -> f64 {
    raw.map(|s| parse_finite(&normalize_decimal(s))).unwrap_or(0.0)
}

/// Parse a trimmed integer. Returns `0` on failure.
pub fn parse_int(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Parse a composite `total(wins)` field into `(total, wins)`.
///
/// A plain integer is read as a total with zero wins; `None` or garbage
/// yields `(0, 0)`.
pub fn parse_count_wins(raw: Option<&str>) -> (i64, i64) {
    let Some(raw) = raw else {
        return (0, 0);
    };
    match COUNT_WINS_PATTERN.captures(raw) {
        Some(caps) => {
            let total = caps[1].parse().unwrap_or(0);
            let wins = caps[2].parse().unwrap_or(0);
            (total, wins)
        }
        None => (parse_int(Some(raw)), 0),
    }
}

/// Parse a list literal such as `['Jett', "Raze"]` into its string items.
///
/// Items must be single- or double-quoted strings; bare integers are also
/// accepted and kept as text. Returns `None` when the text is not a
/// well-formed list, so callers can treat it as "no agents".
pub fn parse_string_list(raw: &str) -> Option<Vec<String>> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let Some(&first) = chars.peek() else {
            break;
        };

        if first == '\'' || first == '"' {
            chars.next();
            let mut item = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c == '\\' {
                    item.push(chars.next()?);
                } else if c == first {
                    closed = true;
                    break;
                } else {
                    item.push(c);
                }
            }
            if !closed {
                return None;
            }
            items.push(item);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c == ',' || c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            token.parse::<i64>().ok()?;
            items.push(token);
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }

    Some(items)
}
