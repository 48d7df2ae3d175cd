/// Returned by the alphabetic and Roman converters for values that have no representation
pub const INVALID_ORDINAL: &str = "-";

/// Roman numeral symbols, largest first, including the subtractive pairs
const ROMAN_NUMERALS: [(usize, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// A placeholder character recognized inside an ordinal template
#[derive(Debug, Clone, Copy)]
pub struct OrdinalMarker {
    pub placeholder: char,
    pub convert: fn(usize) -> String,
}

/// Markers in detection order: the first one present in a template wins
pub const ORDINAL_MARKERS: [OrdinalMarker; 5] = [
    OrdinalMarker {
        placeholder: '1',
        convert: to_decimal,
    },
    OrdinalMarker {
        placeholder: 'a',
        convert: to_alpha,
    },
    OrdinalMarker {
        placeholder: 'A',
        convert: to_alpha_upper,
    },
    OrdinalMarker {
        placeholder: 'i',
        convert: to_roman,
    },
    OrdinalMarker {
        placeholder: 'I',
        convert: to_roman_upper,
    },
];

pub fn to_decimal(n: usize) -> String {
    n.to_string()
}

/// Bijective base-26 using `a`..`z`, the way spreadsheet columns are named
/// (1 → `a`, 26 → `z`, 27 → `aa`).
pub fn to_alpha(n: usize) -> String {
    if n == 0 {
        return INVALID_ORDINAL.to_string();
    }

    let mut digits = Vec::new();
    let mut n = n;
    while n > 0 {
        let digit = ((n - 1) % 26) as u8;
        digits.push(char::from(b'a' + digit));
        n = (n - 1) / 26;
    }
    digits.iter().rev().collect()
}

pub fn to_alpha_upper(n: usize) -> String {
    to_alpha(n).to_uppercase()
}

/// Lowercase Roman numerals in subtractive notation. There is no upper bound, so values past
/// 3999 simply repeat `m`.
pub fn to_roman(n: usize) -> String {
    if n == 0 {
        return INVALID_ORDINAL.to_string();
    }

    let mut output = String::new();
    let mut remaining = n;
    for (value, symbol) in ROMAN_NUMERALS {
        while remaining >= value {
            output.push_str(symbol);
            remaining -= value;
        }
    }
    output
}

pub fn to_roman_upper(n: usize) -> String {
    to_roman(n).to_uppercase()
}

/// Replace the first `placeholder` in `template` with `value`.
///
/// Spaces directly left of the placeholder are consumed first: the value is right-aligned over
/// the span made of those spaces plus the placeholder, and only grows the template to the right
/// once that span is full.
///
/// ```
/// use printtree::renderer::substitute_placeholder;
///
/// assert_eq!(substitute_placeholder("(  1)", '1', "7"), "(  7)");
/// assert_eq!(substitute_placeholder("(  1)", '1', "42"), "( 42)");
/// assert_eq!(substitute_placeholder("(  1)", '1', "1234"), "(1234)");
/// ```
pub fn substitute_placeholder(template: &str, placeholder: char, value: &str) -> String {
    let Some(end) = template.find(placeholder) else {
        return template.to_string();
    };

    let start = template[..end].trim_end_matches(' ').len();
    let span = template[start..end].chars().count() + 1;

    format!(
        "{}{:>width$}{}",
        &template[..start],
        value,
        &template[end + placeholder.len_utf8()..],
        width = span
    )
}

/// Expand the ordinal marker of `template` (if any) for the 1-based `position`.
pub fn expand_template(template: &str, position: usize) -> String {
    ORDINAL_MARKERS
        .iter()
        .find(|marker| template.contains(marker.placeholder))
        .map(|marker| {
            substitute_placeholder(template, marker.placeholder, &(marker.convert)(position))
        })
        .unwrap_or_else(|| template.to_string())
}
