//! Basic usage example for searchhit-rs
//!
//! This example demonstrates how to:
//! - Build a company hit with a region chain
//! - Pass it through the wire codec in both forms
//! - Turn it into a short identifier and back

use searchhit_core::wire::{decode_from_slice, encode_to_vec};
use searchhit_core::{Coordinate, Hit, HitKind, IdPair, InfoEntry, InfoKind, Result, WireForm};

fn main() -> Result<()> {
    println!("=== searchhit-rs Basic Usage Example ===\n");

    let mut muni = Hit::new(HitKind::Municipal, IdPair::new(1, 2), 0).with_name("Lund");
    muni.add_region_owned(Hit::new(HitKind::Country, IdPair::new(0, 1), 0).with_name("Sweden"))?;

    let mut hit = Hit::new(HitKind::Company, IdPair::new(1, 0x4711), 3).with_name("Café Lund");
    hit.coord = Coordinate::new(664_123_456, 146_654_321);
    hit.infos.push(InfoEntry::new(InfoKind::PhoneNumber, "Phone", "+46 46 00 00 00"));
    hit.add_region_owned(muni)?;
    hit.update_location_name(searchhit_core::KindMask::REGIONS);
    println!("Hit: {hit} in {}\n", hit.location_name);

    // Example 1: Wire codec
    println!("--- Example 1: Wire codec ---");
    for form in [WireForm::Full, WireForm::Compact] {
        let bytes = encode_to_vec(&hit, form)?;
        let back = decode_from_slice(&bytes, form)?;
        println!(
            "{form:?}: {} bytes, {} info entries after decode",
            bytes.len(),
            back.nbr_infos()
        );
    }
    println!();

    // Example 2: Identifiers
    println!("--- Example 2: Identifiers ---");
    let id = hit.to_identifier();
    println!("Identifier: {id}");
    match Hit::from_identifier(&id) {
        Some(parsed) => println!("Parsed back: {parsed} (offset {})", parsed.offset()),
        None => println!("Identifier did not parse"),
    }
    if let Some(probe) = Hit::from_identifier("C:664000000:146000000:1:Lund") {
        println!("Coordinate probe: {probe} as {:?}", probe.kind());
    }

    Ok(())
}
