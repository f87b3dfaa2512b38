//! HTML character entity decoding for literal message text.

use std::borrow::Cow;

// Longest entity body considered; anything longer is treated as plain text.
const MAX_ENTITY_LEN: usize = 32;

/// Decodes named and numeric HTML character references in `text`.
///
/// Recognised forms are the common named entities (`&amp;`, `&lt;`, `&gt;`,
/// `&quot;`, `&apos;`, `&nbsp;` and a handful of typographic ones) plus
/// decimal (`&#38;`) and hexadecimal (`&#x26;`) references. Anything else,
/// including references to NUL, surrogates, or code points beyond Unicode,
/// is left untouched.
///
/// # Examples
///
/// ```rust
/// use svcmsg::decode_entities;
///
/// assert_eq!(decode_entities("a &amp; b &#60;&#x3E;"), "a & b <>");
/// assert_eq!(decode_entities("&bogus; &amp"), "&bogus; &amp");
/// ```
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((before, after)) = rest.split_once('&') {
        decoded.push_str(before);
        let reference = entity_body(after)
            .and_then(|(body, tail)| decode_reference(body).map(|ch| (ch, tail)));
        if let Some((ch, tail)) = reference {
            decoded.push(ch);
            rest = tail;
        } else {
            decoded.push('&');
            rest = after;
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

// Splits `text` at the `;` closing an entity body, looking no further than
// `MAX_ENTITY_LEN` bytes ahead.
fn entity_body(text: &str) -> Option<(&str, &str)> {
    let (end, _) = text
        .char_indices()
        .take_while(|&(index, _)| index <= MAX_ENTITY_LEN)
        .find(|&(_, ch)| ch == ';')?;
    let (body, tail) = text.split_at(end);
    Some((body, tail.strip_prefix(';')?))
}

fn decode_reference(body: &str) -> Option<char> {
    body.strip_prefix('#')
        .map_or_else(|| named_entity(body), decode_numeric)
}

fn decode_numeric(digits: &str) -> Option<char> {
    let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        if hex.is_empty() || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()?
    } else {
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|ch| *ch != '\0')
}

fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        _ => return None,
    };
    Some(ch)
}
