// crates/searchhit-core/src/ident.rs

//! # Identifier Codec
//!
//! Short textual references to a single hit, passed across the client
//! boundary. Three grammars, selected by the first character:
//!
//! | prefix        | layout                                                        |
//! |---------------|---------------------------------------------------------------|
//! | kind char     | `k:<item>:<map>:<offset>:<itemType>[:...]` (hex)              |
//! | `X` / `Y`     | `Xk:<lat>:<lon>:<angle+1>:<itemType>:<extId>:<extSource>` (hex) |
//! | `C` / `K`     | `C:<lat>:<lon>:<closed>:<name>` (decimal, `0x` hex or `0` octal) |
//!
//! `C` names are UTF-8, `K` names are Latin-1. Hex output is uppercase
//! without leading zeros. Anything malformed parses to `None`.

use crate::kind::HitKind;
use crate::model::{Coordinate, Hit, IdPair, ItemType};
use crate::text::latin1_to_string;

/// Shortest string any grammar can produce.
const MIN_LEN: usize = 5;

/// Renders the identifier of `hit`.
///
/// Hits with a non-zero external source use the `X` grammar; the external id
/// must not contain `:` for the result to parse again.
pub fn format(hit: &Hit) -> String {
    let kind = hit.kind().type_char();
    if hit.ext_source == 0 {
        format!(
            "{kind}:{:X}:{:X}:{:X}:{:X}",
            hit.id.item_id,
            hit.id.map_id,
            hit.offset(),
            hit.item_type().0
        )
    } else {
        // +1 turns the unknown angle 0xFFFF into 0.
        format!(
            "X{kind}:{:X}:{:X}:{:X}:{:X}:{}:{:X}",
            hit.coord.lat as u32,
            hit.coord.lon as u32,
            hit.angle.wrapping_add(1),
            hit.item_type().0,
            hit.ext_id,
            hit.ext_source
        )
    }
}

/// Parses an identifier. Surrounding whitespace is ignored.
pub fn parse(input: &str) -> Option<Hit> {
    parse_bytes(input.as_bytes())
}

/// Parses an identifier given as raw bytes, which is how `K:` probes with
/// Latin-1 names arrive.
pub fn parse_bytes(input: &[u8]) -> Option<Hit> {
    let s = trim_ascii(input);
    if s.len() < MIN_LEN {
        log::debug!("identifier too short: {:?}", String::from_utf8_lossy(s));
        return None;
    }
    let parsed = match s[0] {
        b'X' | b'Y' => parse_external(&s[1..]),
        b'C' => parse_probe(&s[1..], Encoding::Utf8),
        b'K' => parse_probe(&s[1..], Encoding::Latin1),
        b'P' => {
            log::warn!(
                "persistent identifiers are not resolved here: {:?}",
                String::from_utf8_lossy(s)
            );
            return None;
        }
        _ => parse_internal(s),
    };
    if parsed.is_none() {
        log::debug!("rejected identifier {:?}", String::from_utf8_lossy(s));
    }
    parsed
}

impl Hit {
    /// See [`format`].
    pub fn to_identifier(&self) -> String {
        format(self)
    }

    /// See [`parse`].
    pub fn from_identifier(s: &str) -> Option<Hit> {
        parse(s)
    }
}

// ----------------------------------------------------------------------------
// Grammars
// ----------------------------------------------------------------------------

/// `k:<item>:<map>:<offset>:<itemType>[:...]`
fn parse_internal(s: &[u8]) -> Option<Hit> {
    let kind = kind_from_byte(s[0])?;
    let mut fields = Fields::after_colon(&s[1..])?;
    let item_id = hex_u32(fields.next()?)?;
    let map_id = hex_u32(fields.next()?)?;
    let offset = hex_u16(fields.next()?)?;
    // Trailing data after the item type is allowed and ignored.
    let item_type = hex_u16(fields.last())?;

    let mut hit = Hit::new(kind, IdPair::new(map_id, item_id), offset);
    hit.set_item_type(ItemType(item_type));
    Some(hit)
}

/// `k:<lat>:<lon>:<angle+1>:<itemType>:<extId>:<extSource>`, prefix removed.
fn parse_external(s: &[u8]) -> Option<Hit> {
    let kind = kind_from_byte(*s.first()?)?;
    let mut fields = Fields::after_colon(&s[1..])?;
    let lat = hex_u32(fields.next()?)? as i32;
    let lon = hex_u32(fields.next()?)? as i32;
    let angle = hex_u16(fields.next()?)?.wrapping_sub(1);
    let item_type = hex_u16(fields.next()?)?;
    let ext_id = std::str::from_utf8(fields.next()?).ok()?.to_string();
    let ext_source = hex_u16(fields.last())?;

    let mut hit = Hit::new(kind, IdPair::INVALID, 0);
    hit.coord = Coordinate::new(lat, lon);
    hit.angle = angle;
    hit.set_item_type(ItemType(item_type));
    hit.ext_id = ext_id;
    hit.ext_source = ext_source;
    Some(hit)
}

#[derive(Clone, Copy)]
enum Encoding {
    Utf8,
    Latin1,
}

/// `:<lat>:<lon>:<closed>:<name>`, prefix removed. The name may contain `:`.
fn parse_probe(s: &[u8], encoding: Encoding) -> Option<Hit> {
    let mut fields = Fields::after_colon(s)?;
    let lat = number_i32(fields.next()?)?;
    let lon = number_i32(fields.next()?)?;
    let closed = number_i32(fields.next()?)? != 0;
    let raw_name = fields.rest();
    let name = match encoding {
        Encoding::Utf8 => std::str::from_utf8(raw_name).ok()?.to_string(),
        Encoding::Latin1 => latin1_to_string(raw_name),
    };

    let kind = if closed {
        HitKind::BuiltUpArea
    } else {
        HitKind::Street
    };
    let mut hit = Hit::new(kind, IdPair::INVALID, 0).with_name(name);
    hit.coord = Coordinate::new(lat, lon);
    // Both shapes are points of interest; only the kind tells them apart.
    hit.set_item_type(ItemType::POINT_OF_INTEREST);
    Some(hit)
}

// ----------------------------------------------------------------------------
// Field scanning
// ----------------------------------------------------------------------------

struct Fields<'a> {
    rest: &'a [u8],
}

impl<'a> Fields<'a> {
    /// Requires `s` to start with the `:` that follows the kind character.
    fn after_colon(s: &'a [u8]) -> Option<Self> {
        match s.split_first() {
            Some((b':', rest)) => Some(Self { rest }),
            _ => None,
        }
    }

    /// The field up to the next `:`, which must exist.
    fn next(&mut self) -> Option<&'a [u8]> {
        let at = self.rest.iter().position(|b| *b == b':')?;
        let field = &self.rest[..at];
        self.rest = &self.rest[at + 1..];
        Some(field)
    }

    /// The field up to the next `:` or the end of input.
    fn last(&mut self) -> &'a [u8] {
        match self.next() {
            Some(field) => field,
            None => std::mem::take(&mut self.rest),
        }
    }

    fn rest(self) -> &'a [u8] {
        self.rest
    }
}

fn kind_from_byte(b: u8) -> Option<HitKind> {
    HitKind::from_type_char(char::from(b))
}

fn trim_ascii(mut s: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = s {
        if !first.is_ascii_whitespace() {
            break;
        }
        s = rest;
    }
    while let [rest @ .., last] = s {
        if !last.is_ascii_whitespace() {
            break;
        }
        s = rest;
    }
    s
}

fn hex_str(field: &[u8]) -> Option<&str> {
    if field.is_empty() || !field.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    std::str::from_utf8(field).ok()
}

fn hex_u32(field: &[u8]) -> Option<u32> {
    u32::from_str_radix(hex_str(field)?, 16).ok()
}

fn hex_u16(field: &[u8]) -> Option<u16> {
    u16::from_str_radix(hex_str(field)?, 16).ok()
}

/// Optional sign, then a C-style literal: `0x` hex, `0` octal or decimal.
/// Magnitudes up to `u32::MAX` wrap into `i32`, as the map engine's
/// coordinate fields do.
fn number_i32(field: &[u8]) -> Option<i32> {
    let (negative, digits) = match field.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, field),
    };
    let magnitude = match digits {
        [b'0', b'x' | b'X', hex @ ..] => hex_u32(hex)?,
        [b'0', oct @ ..] if !oct.is_empty() => {
            if !oct.iter().all(|b| (b'0'..=b'7').contains(b)) {
                return None;
            }
            u32::from_str_radix(std::str::from_utf8(oct).ok()?, 8).ok()?
        }
        _ => {
            if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
                return None;
            }
            std::str::from_utf8(digits).ok()?.parse::<u32>().ok()?
        }
    };
    let value = magnitude as i32;
    Some(if negative { value.wrapping_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_format_is_uppercase_hex_without_padding() {
        let mut hit = Hit::new(HitKind::Street, IdPair::new(0x10, 0x20), 0);
        hit.set_item_type(ItemType(5));
        assert_eq!(format(&hit), "s:20:10:0:5");

        let mut hit = Hit::new(HitKind::Company, IdPair::new(0xABC, 0xDEF0), 0x1F);
        hit.set_item_type(ItemType::POINT_OF_INTEREST);
        assert_eq!(format(&hit), "c:DEF0:ABC:1F:E");
    }

    #[test]
    fn internal_grammar_accepts_trailing_data() {
        let hit = parse("  s:3004532:0:1:8:whatever \n").unwrap();
        assert_eq!(hit.id, IdPair::new(0, 0x300_4532));
        assert_eq!(hit.offset(), 1);
        assert_eq!(hit.item_type(), ItemType::STREET);
    }

    #[test]
    fn field_scanner() {
        let mut f = Fields::after_colon(b":a:bc:").unwrap();
        assert_eq!(f.next(), Some(&b"a"[..]));
        assert_eq!(f.next(), Some(&b"bc"[..]));
        assert_eq!(f.last(), &b""[..]);
        assert!(Fields::after_colon(b"a:").is_none());
    }

    #[test]
    fn probe_numbers() {
        assert_eq!(number_i32(b"123"), Some(123));
        assert_eq!(number_i32(b"-123"), Some(-123));
        assert_eq!(number_i32(b"0x1F"), Some(31));
        assert_eq!(number_i32(b"4294967295"), Some(-1));
        assert_eq!(number_i32(b""), None);
        assert_eq!(number_i32(b"12a"), None);
        assert_eq!(number_i32(b"0x"), None);
        assert_eq!(number_i32(b"0"), Some(0));
        assert_eq!(number_i32(b"010"), Some(8));
        assert_eq!(number_i32(b"-017"), Some(-15));
        assert_eq!(number_i32(b"08"), None);
    }

    #[test]
    fn hex_fragments_must_be_complete() {
        assert_eq!(hex_u32(b"FF"), Some(255));
        assert_eq!(hex_u32(b"ff"), Some(255));
        assert_eq!(hex_u32(b""), None);
        assert_eq!(hex_u32(b"+1"), None);
        assert_eq!(hex_u32(b"1G"), None);
        assert_eq!(hex_u32(b"100000000"), None);
        assert_eq!(hex_u16(b"10000"), None);
    }

    #[test]
    fn trims_ascii_whitespace() {
        assert_eq!(trim_ascii(b" \t ab c \r\n"), b"ab c");
        assert_eq!(trim_ascii(b"   "), b"");
    }
}
