// crates/searchhit-core/src/wire/mod.rs

//! # Wire Codec
//!
//! Byte-exact save/load of hits between backend processes.
//!
//! - **Full** carries every field.
//! - **Compact** leaves out item types, score, distance, angle, external
//!   source and info entries. Nested regions are always compact.
//!
//! The kind is read from the stream, so [`decode`] needs no hint from the
//! caller. A length word after the header lets readers skip bytes appended by
//! newer writers.

mod buffer;
mod hit;

pub use buffer::{WireReader, WireWriter};

use crate::config::CodecConfig;
use crate::error::Result;
use crate::model::Hit;
use serde::{Deserialize, Serialize};

/// Which of the two record layouts to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireForm {
    Full,
    Compact,
}

impl WireForm {
    pub fn is_compact(self) -> bool {
        self == WireForm::Compact
    }
}

/// Outcome of appending a hit to a batch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appended {
    /// The hit was written starting at this position.
    At(usize),
    /// The batch reached its size ceiling; nothing was written.
    Full,
}

/// Encodes `hit` at the end of `w` using the process-wide [`CodecConfig`].
/// Returns the number of bytes written.
pub fn encode(hit: &Hit, w: &mut WireWriter, form: WireForm) -> Result<usize> {
    encode_with(hit, w, form, CodecConfig::global())
}

pub fn encode_with(
    hit: &Hit,
    w: &mut WireWriter,
    form: WireForm,
    cfg: &CodecConfig,
) -> Result<usize> {
    hit::save(hit, w, form, cfg, false)
}

/// Encodes a single hit into a fresh buffer.
pub fn encode_to_vec(hit: &Hit, form: WireForm) -> Result<Vec<u8>> {
    let mut w = WireWriter::new();
    encode(hit, &mut w, form)?;
    Ok(w.into_inner())
}

/// Decodes the hit starting at the reader's position.
///
/// `form` must match the form the record was written with.
pub fn decode(r: &mut WireReader<'_>, form: WireForm) -> Result<Hit> {
    hit::load(r, form, 0)
}

/// Decodes a single hit from the start of `bytes`.
pub fn decode_from_slice(bytes: &[u8], form: WireForm) -> Result<Hit> {
    decode(&mut WireReader::new(bytes), form)
}

/// Appends `hit` to a batch buffer unless the batch is already full.
pub fn append(hit: &Hit, w: &mut WireWriter, form: WireForm, cfg: &CodecConfig) -> Result<Appended> {
    if w.position() >= cfg.max_batch_size {
        log::debug!(
            "batch buffer full at {} bytes (ceiling {}), not adding {hit}",
            w.position(),
            cfg.max_batch_size
        );
        return Ok(Appended::Full);
    }
    let written = encode_with(hit, w, form, cfg)?;
    Ok(Appended::At(w.position() - written))
}

/// Appends hits until the batch fills up. Returns how many were written.
pub fn encode_batch<'a, I>(
    hits: I,
    w: &mut WireWriter,
    form: WireForm,
    cfg: &CodecConfig,
) -> Result<usize>
where
    I: IntoIterator<Item = &'a Hit>,
{
    let mut written = 0;
    for hit in hits {
        match append(hit, w, form, cfg)? {
            Appended::At(_) => written += 1,
            Appended::Full => break,
        }
    }
    Ok(written)
}

/// Decodes `count` consecutive hits.
pub fn decode_batch(r: &mut WireReader<'_>, form: WireForm, count: usize) -> Result<Vec<Hit>> {
    (0..count).map(|_| decode(r, form)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::HitKind;
    use crate::model::IdPair;

    fn city(name: &str, item: u32) -> Hit {
        Hit::new(HitKind::Municipal, IdPair::new(1, item), 0).with_name(name)
    }

    #[test]
    fn header_carries_class_version_and_kind() {
        let bytes = encode_to_vec(&city("Lund", 5), WireForm::Compact).unwrap();
        assert_eq!(&bytes[0..4], &[0x80, 0, 0, 1]);
        assert_eq!(&bytes[4..8], &HitKind::Municipal.mask().bits().to_be_bytes());

        let overview = Hit::new_overview(HitKind::Municipal, IdPair::new(1, 5));
        let bytes = encode_to_vec(&overview, WireForm::Compact).unwrap();
        assert_eq!(&bytes[0..4], &[0x80, 0, 0, 2]);
    }

    #[test]
    fn batch_stops_at_ceiling() {
        let cfg = CodecConfig {
            max_batch_size: 100,
            ..CodecConfig::default()
        };
        let hits: Vec<Hit> = (0..10).map(|i| city("Somewhere", i)).collect();
        let mut w = WireWriter::new();
        let written = encode_batch(&hits, &mut w, WireForm::Full, &cfg).unwrap();
        assert!(written > 0 && written < hits.len());
        assert_eq!(append(&hits[0], &mut w, WireForm::Full, &cfg).unwrap(), Appended::Full);

        let mut r = WireReader::new(w.as_bytes());
        let back = decode_batch(&mut r, WireForm::Full, written).unwrap();
        assert_eq!(back.as_slice(), &hits[..written]);
        assert!(r.is_empty());
    }

    #[test]
    fn first_append_reports_position_zero() {
        let mut w = WireWriter::new();
        let cfg = CodecConfig::default();
        assert_eq!(
            append(&city("A", 1), &mut w, WireForm::Compact, &cfg).unwrap(),
            Appended::At(0)
        );
        let second = append(&city("B", 2), &mut w, WireForm::Compact, &cfg).unwrap();
        assert!(matches!(second, Appended::At(p) if p > 0));
    }
}
