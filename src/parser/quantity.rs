/// A quantity read from the front of a token stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    /// Unified numeric value (e.g. 1.5 for "1 1/2")
    pub value: f64,
    /// Number of tokens the quantity occupied
    pub consumed: usize,
}

/// Read a leading quantity from `tokens`.
///
/// Accepted forms: integers, decimals, fractions (`3/4`), mixed numbers
/// spread over two tokens (`1 1/2`, `1 ½`) or joined by a hyphen (`1-1/2`),
/// vulgar fraction glyphs alone or attached to a whole number (`½`, `1½`),
/// and ranges (`2-3`), which resolve to their lower bound.
pub fn leading_quantity(tokens: &[&str]) -> Option<Quantity> {
    let first = tokens.first()?;
    let (value, whole) = single_token(first)?;

    if whole {
        if let Some(fraction) = tokens.get(1).and_then(|next| proper_fraction(next)) {
            return Some(Quantity {
                value: value + fraction,
                consumed: 2,
            });
        }
    }

    Some(Quantity { value, consumed: 1 })
}

/// Value of a single token and whether it was a plain whole number
fn single_token(token: &str) -> Option<(f64, bool)> {
    if let Some(value) = proper_fraction(token) {
        return Some((value, false));
    }
    if let Some(value) = attached_glyph(token) {
        return Some((value, false));
    }
    if let Some((low, high)) = token.split_once(['-', '\u{2013}']) {
        return hyphenated(low, high).map(|value| (value, false));
    }
    decimal(token)
}

/// `a/b` or a vulgar fraction glyph
fn proper_fraction(token: &str) -> Option<f64> {
    if let Some(value) = glyph(token) {
        return Some(value);
    }

    let (numerator, denominator) = token.split_once('/')?;
    let numerator = integer(numerator)?;
    let denominator = integer(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    finite(numerator / denominator)
}

/// `1½` style tokens
fn attached_glyph(token: &str) -> Option<f64> {
    let last = token.chars().last()?;
    let fraction = glyph_char(last)?;
    let whole = &token[..token.len() - last.len_utf8()];
    if whole.is_empty() {
        return Some(fraction);
    }
    integer(whole).map(|whole| whole + fraction)
}

/// `1-1/2` is a mixed number, `2-3` is a range
fn hyphenated(low: &str, high: &str) -> Option<f64> {
    if let Some(whole) = integer(low) {
        if let Some(fraction) = proper_fraction(high) {
            return Some(whole + fraction);
        }
    }

    let (low_value, _) = single_token(low)?;
    single_token(high)?;
    Some(low_value)
}

/// Plain integer or decimal. Signs, exponents and `inf`/`nan` are rejected.
fn decimal(token: &str) -> Option<(f64, bool)> {
    let mut dots = 0;
    let mut digits = 0;
    for c in token.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }

    let value = finite(token.parse::<f64>().ok()?)?;
    Some((value, dots == 0))
}

fn integer(token: &str) -> Option<f64> {
    match decimal(token)? {
        (value, true) => Some(value),
        _ => None,
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn glyph(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    glyph_char(c)
}

/// Decimal value of a unicode vulgar fraction
fn glyph_char(c: char) -> Option<f64> {
    let value = match c {
        '¼' => 0.25,
        '½' => 0.5,
        '¾' => 0.75,
        '⅐' => 1.0 / 7.0,
        '⅑' => 1.0 / 9.0,
        '⅒' => 0.1,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '⅕' => 0.2,
        '⅖' => 0.4,
        '⅗' => 0.6,
        '⅘' => 0.8,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 0.125,
        '⅜' => 0.375,
        '⅝' => 0.625,
        '⅞' => 0.875,
        _ => return None,
    };
    Some(value)
}
