// crates/searchhit-core/src/kind.rs

//! # Kind Registry
//!
//! Every hit carries exactly one kind. On the wire a kind is a single bit of
//! [`KindMask`]; in identifier strings it is a single lowercase ASCII letter.
//! [`KIND_TABLE`] is the one place both mappings come from.

use crate::model::ItemType;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bitmask over hit kinds. Used as the kind word on the wire and as the
    /// eligibility filter for location-name resolution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct KindMask: u32 {
        const STREETS        = 0x0001;
        const COMPANIES      = 0x0002;
        const CATEGORIES     = 0x0004;
        const MISC           = 0x0008;
        const MUNICIPALS     = 0x0010;
        const BUILT_UP_AREAS = 0x0020;
        const CITY_PARTS     = 0x0040;
        const ZIP_CODES      = 0x0080;
        const ZIP_AREAS      = 0x0100;
        const PERSONS        = 0x0200;
        const COUNTRIES      = 0x0400;

        /// Every administrative-area kind.
        const REGIONS = Self::MUNICIPALS.bits()
            | Self::BUILT_UP_AREAS.bits()
            | Self::CITY_PARTS.bits()
            | Self::ZIP_CODES.bits()
            | Self::ZIP_AREAS.bits()
            | Self::COUNTRIES.bits();

        /// The kinds printed in a location name by default.
        const LOCATION = Self::MUNICIPALS.bits()
            | Self::BUILT_UP_AREAS.bits()
            | Self::CITY_PARTS.bits();
    }
}

/// The closed set of hit kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    Street,
    Company,
    Category,
    Misc,
    Municipal,
    BuiltUpArea,
    CityPart,
    ZipCode,
    ZipArea,
    Person,
    Country,
}

/// Bijective table: kind, identifier character, wire mask.
///
/// Capital letters are reserved for the probe grammars (`C`, `K`, `X`, `Y`, `P`).
pub const KIND_TABLE: [(HitKind, char, KindMask); 11] = [
    (HitKind::Street, 's', KindMask::STREETS),
    (HitKind::Company, 'c', KindMask::COMPANIES),
    (HitKind::Category, 't', KindMask::CATEGORIES),
    (HitKind::Misc, 'm', KindMask::MISC),
    (HitKind::Municipal, 'a', KindMask::MUNICIPALS),
    (HitKind::BuiltUpArea, 'b', KindMask::BUILT_UP_AREAS),
    (HitKind::CityPart, 'd', KindMask::CITY_PARTS),
    (HitKind::ZipCode, 'z', KindMask::ZIP_CODES),
    (HitKind::ZipArea, 'x', KindMask::ZIP_AREAS),
    (HitKind::Person, 'p', KindMask::PERSONS),
    (HitKind::Country, 'l', KindMask::COUNTRIES),
];

impl HitKind {
    pub const ALL: [HitKind; 11] = [
        HitKind::Street,
        HitKind::Company,
        HitKind::Category,
        HitKind::Misc,
        HitKind::Municipal,
        HitKind::BuiltUpArea,
        HitKind::CityPart,
        HitKind::ZipCode,
        HitKind::ZipArea,
        HitKind::Person,
        HitKind::Country,
    ];

    #[inline]
    fn entry(self) -> &'static (HitKind, char, KindMask) {
        // Table rows are declared in enum order.
        &KIND_TABLE[self as usize]
    }

    /// The single bit this kind occupies in a [`KindMask`].
    #[inline]
    pub fn mask(self) -> KindMask {
        self.entry().2
    }

    /// Identifier character, e.g. `'s'` for streets.
    #[inline]
    pub fn type_char(self) -> char {
        self.entry().1
    }

    /// Reverse of [`HitKind::type_char`]. Unknown characters yield `None`.
    pub fn from_type_char(c: char) -> Option<HitKind> {
        KIND_TABLE
            .iter()
            .find(|(_, ch, _)| *ch == c)
            .map(|(kind, _, _)| *kind)
    }

    /// Decode the kind word read from the wire. Anything but exactly one
    /// known bit yields `None`.
    pub fn from_bits(bits: u32) -> Option<HitKind> {
        KIND_TABLE
            .iter()
            .find(|(_, _, mask)| mask.bits() == bits)
            .map(|(kind, _, _)| *kind)
    }

    /// True for municipal, built-up area, city part, zip code, zip area and country.
    #[inline]
    pub fn is_region(self) -> bool {
        KindMask::REGIONS.contains(self.mask())
    }

    /// True if this kind is one of the bits in `mask`.
    #[inline]
    pub fn is_in(self, mask: KindMask) -> bool {
        mask.intersects(self.mask())
    }

    /// Item type a freshly created hit of this kind starts with.
    pub fn default_item_type(self) -> ItemType {
        match self {
            HitKind::Street => ItemType::STREET_SEGMENT,
            HitKind::Company | HitKind::Person => ItemType::POINT_OF_INTEREST,
            HitKind::Category => ItemType::CATEGORY,
            HitKind::Misc => ItemType::ROUTEABLE,
            HitKind::Municipal => ItemType::MUNICIPAL,
            HitKind::BuiltUpArea => ItemType::BUILT_UP_AREA,
            HitKind::CityPart => ItemType::CITY_PART,
            HitKind::ZipCode => ItemType::ZIP_CODE,
            HitKind::ZipArea => ItemType::ZIP_AREA,
            // Countries have no item of their own in the map engine.
            HitKind::Country => ItemType::BUILT_UP_AREA,
        }
    }
}

/// Identifier character for a mask holding exactly one kind bit.
pub fn char_for_mask(mask: KindMask) -> Option<char> {
    HitKind::from_bits(mask.bits()).map(HitKind::type_char)
}

/// Mask for an identifier character; unknown characters map to the empty mask.
pub fn mask_for_char(c: char) -> KindMask {
    HitKind::from_type_char(c)
        .map(HitKind::mask)
        .unwrap_or_else(KindMask::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_declared_in_enum_order() {
        for (idx, kind) in HitKind::ALL.iter().enumerate() {
            assert_eq!(KIND_TABLE[idx].0, *kind);
        }
    }

    #[test]
    fn char_and_mask_are_bijective() {
        for kind in HitKind::ALL {
            assert_eq!(HitKind::from_type_char(kind.type_char()), Some(kind));
            assert_eq!(HitKind::from_bits(kind.mask().bits()), Some(kind));
            assert_eq!(kind.mask().bits().count_ones(), 1);
        }
    }

    #[test]
    fn unknown_values_map_to_no_kind() {
        assert_eq!(HitKind::from_type_char('q'), None);
        assert_eq!(HitKind::from_type_char('S'), None);
        assert_eq!(HitKind::from_bits(0), None);
        assert_eq!(HitKind::from_bits(0x0003), None);
        assert_eq!(char_for_mask(KindMask::LOCATION), None);
        assert!(mask_for_char('?').is_empty());
    }

    #[test]
    fn region_kinds() {
        assert!(HitKind::Municipal.is_region());
        assert!(HitKind::Country.is_region());
        assert!(!HitKind::Street.is_region());
        assert!(!HitKind::Person.is_region());
        assert!(HitKind::CityPart.is_in(KindMask::LOCATION));
        assert!(!HitKind::ZipCode.is_in(KindMask::LOCATION));
    }
}
