//! searchhit: command-line inspector for searchhit-core
//!
//! Usage examples
//! --------------
//!
//! - Parse an identifier into a JSON hit
//!   $ searchhit parse 'C:664000000:131000000:1:Lund'
//!
//! - Round-trip a hit through the wire codec
//!   $ searchhit encode --compact hit.json
//!   $ searchhit decode --compact 8000000100000010...
//!
//! - Resolve a location name over municipal, built-up area and country
//!   $ searchhit location --kinds a,b,l hit.json
//!
//! - Merge address entries with Swedish-style rendering
//!   $ searchhit normalize --top-region 46 --lang sv hit.json
//!
//! Hits are read from a file or stdin (`-`) as JSON. Codec settings come from
//! the defaults, then `--config <file>`, then `SEARCHHIT_*` variables.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use searchhit_core::wire::{decode_from_slice, encode_with};
use searchhit_core::{CodecConfig, Hit, HitKind, KindMask, WireForm, WireWriter};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    match args.command {
        Commands::Parse { id } => match Hit::from_identifier(&id) {
            Some(hit) => print_json(&hit)?,
            None => bail!("not a valid identifier: {id:?}"),
        },

        Commands::Format { input } => {
            let hit = read_hit(&input)?;
            println!("{}", hit.to_identifier());
        }

        Commands::Encode { compact, input } => {
            let cfg = codec_config(args.config.as_deref())?;
            let hit = read_hit(&input)?;
            let mut w = WireWriter::new();
            let written = encode_with(&hit, &mut w, form(compact), &cfg)?;
            log::debug!("encoded {hit} into {written} bytes");
            println!("{}", hex::encode(w.as_bytes()));
        }

        Commands::Decode {
            compact,
            hex: encoded,
        } => {
            let bytes = hex::decode(encoded.trim()).context("wire bytes are not valid hex")?;
            let hit = decode_from_slice(&bytes, form(compact))?;
            print_json(&hit)?;
        }

        Commands::Location { kinds, input } => {
            let mask = kind_mask(&kinds)?;
            let hit = read_hit(&input)?;
            println!("{}", hit.create_location_name(mask));
        }

        Commands::Normalize {
            top_region,
            lang,
            input,
        } => {
            let mut hit = read_hit(&input)?;
            hit.merge_to_sane_item_infos(&lang, top_region);
            print_json(&hit.infos)?;
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn form(compact: bool) -> WireForm {
    if compact {
        WireForm::Compact
    } else {
        WireForm::Full
    }
}

fn kind_mask(kinds: &[char]) -> anyhow::Result<KindMask> {
    if kinds.is_empty() {
        return Ok(KindMask::LOCATION);
    }
    let mut mask = KindMask::empty();
    for &c in kinds {
        let kind =
            HitKind::from_type_char(c).with_context(|| format!("unknown kind character {c:?}"))?;
        mask |= kind.mask();
    }
    Ok(mask)
}

#[cfg(feature = "json")]
fn codec_config(path: Option<&Path>) -> anyhow::Result<CodecConfig> {
    match path {
        Some(path) => CodecConfig::from_json_path(path)
            .with_context(|| format!("reading codec config {}", path.display())),
        None => Ok(*CodecConfig::global()),
    }
}

#[cfg(not(feature = "json"))]
fn codec_config(path: Option<&Path>) -> anyhow::Result<CodecConfig> {
    match path {
        Some(_) => bail!("--config needs the `json` feature"),
        None => Ok(*CodecConfig::global()),
    }
}

fn read_hit(input: &str) -> anyhow::Result<Hit> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading hit from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading hit from {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("{input} is not a JSON hit"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
