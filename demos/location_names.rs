//! Location name example for searchhit-rs
//!
//! Shows the three resolver outcomes: a single chain, a region shared by
//! every chain, and the `/`-joined fallback for unrelated regions.

use searchhit_core::{Hit, HitKind, IdPair, KindMask, Result};

fn region(kind: HitKind, name: &str, map: u32, item: u32) -> Hit {
    Hit::new(kind, IdPair::new(map, item), 0).with_name(name)
}

fn main() -> Result<()> {
    println!("=== searchhit-rs Location Names ===\n");

    let mut lund = region(HitKind::Municipal, "Lund", 1, 2);
    lund.add_region_owned(region(HitKind::Country, "Sweden", 0, 1))?;

    // Single chain
    let mut centrum = region(HitKind::CityPart, "Centrum", 1, 3);
    centrum.add_region_owned(lund.clone())?;
    let mut street = Hit::new(HitKind::Street, IdPair::new(1, 100), 0).with_name("Storgatan");
    street.add_region_owned(centrum.clone())?;
    println!("single chain:    {}", street.create_location_name(KindMask::LOCATION));
    println!("with country:    {}", street.create_location_name(KindMask::REGIONS));

    // Two city parts of the same municipal
    let mut norr = region(HitKind::CityPart, "Norr", 1, 4);
    norr.add_region_owned(lund)?;
    let mut border = Hit::new(HitKind::Street, IdPair::new(1, 101), 0).with_name("Gränsvägen");
    border.add_region_owned(centrum)?;
    border.add_region_owned(norr)?;
    println!("shared ancestor: {}", border.create_location_name(KindMask::LOCATION));

    // Unrelated built-up areas
    let mut between = Hit::new(HitKind::Street, IdPair::new(1, 102), 0).with_name("A1");
    between.add_region_owned(region(HitKind::BuiltUpArea, "Small London", 45, 4))?;
    between.add_region_owned(region(HitKind::BuiltUpArea, "Big London", 44, 3))?;
    println!("fallback:        {}", between.create_location_name(KindMask::LOCATION));

    for printed in border.regions_to_print() {
        println!("printed region:  {printed}");
    }

    Ok(())
}
