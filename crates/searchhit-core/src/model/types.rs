// crates/searchhit-core/src/model/types.rs
use crate::kind::HitKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an item inside the map engine.
///
/// Ordering is by map id, then item id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdPair {
    pub map_id: u32,
    pub item_id: u32,
}

impl IdPair {
    /// Both halves set to `u32::MAX`.
    pub const INVALID: IdPair = IdPair {
        map_id: u32::MAX,
        item_id: u32::MAX,
    };

    pub const fn new(map_id: u32, item_id: u32) -> Self {
        Self { map_id, item_id }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl fmt::Display for IdPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.map_id, self.item_id)
    }
}

/// Fixed-point position in map-engine units.
///
/// `Coordinate::INVALID` is a sentinel value, not an absent one; it is what
/// a freshly created hit carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: i32,
    pub lon: i32,
}

impl Coordinate {
    pub const INVALID: Coordinate = Coordinate {
        lat: i32::MAX,
        lon: i32::MAX,
    };

    pub const fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat != i32::MAX
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Axis-aligned box in map-engine units. Not part of either codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub max_lat: i32,
    pub min_lon: i32,
    pub min_lat: i32,
    pub max_lon: i32,
}

impl BoundingBox {
    /// A box that contains nothing.
    pub const EMPTY: BoundingBox = BoundingBox {
        max_lat: i32::MIN,
        min_lon: i32::MAX,
        min_lat: i32::MAX,
        max_lon: i32::MIN,
    };
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Map-engine item type code.
///
/// Kept as a raw code so that types unknown to this crate survive both codecs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemType(pub u16);

impl ItemType {
    pub const STREET_SEGMENT: ItemType = ItemType(0);
    pub const MUNICIPAL: ItemType = ItemType(1);
    pub const WATER: ItemType = ItemType(2);
    pub const PARK: ItemType = ItemType(3);
    pub const FOREST: ItemType = ItemType(4);
    pub const BUILDING: ItemType = ItemType(5);
    pub const RAILWAY: ItemType = ItemType(6);
    pub const ISLAND: ItemType = ItemType(7);
    pub const STREET: ItemType = ItemType(8);
    pub const NULL: ItemType = ItemType(9);
    pub const ZIP_CODE: ItemType = ItemType(10);
    pub const BUILT_UP_AREA: ItemType = ItemType(11);
    pub const CITY_PART: ItemType = ItemType(12);
    pub const ZIP_AREA: ItemType = ItemType(13);
    pub const POINT_OF_INTEREST: ItemType = ItemType(14);
    pub const CATEGORY: ItemType = ItemType(15);
    pub const ROUTEABLE: ItemType = ItemType(16);
    pub const BUS_ROUTE: ItemType = ItemType(17);
    pub const FERRY: ItemType = ItemType(18);
    pub const AIRPORT: ItemType = ItemType(19);
    pub const AIRCRAFT_ROAD: ItemType = ItemType(20);
    pub const PEDESTRIAN_AREA: ItemType = ItemType(21);
    pub const MILITARY_BASE: ItemType = ItemType(22);
    pub const INDIVIDUAL_BUILDING: ItemType = ItemType(23);
    pub const SUBWAY_LINE: ItemType = ItemType(24);
    pub const BORDER: ItemType = ItemType(26);
    pub const CARTOGRAPHIC: ItemType = ItemType(27);
    /// One past the last defined type; used as "not set".
    pub const NUMBER_OF_TYPES: ItemType = ItemType(28);
}

/// Map rights bitset attached to every hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapRights(pub u64);

/// Confidence score produced by the ranking collaborator.
///
/// Only `score` travels on the wire. The kind and item types are context the
/// ranking collaborator needs, restored from the hit after every decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPoints {
    pub score: u32,
    pub kind: Option<HitKind>,
    pub item_type: ItemType,
    pub item_subtype: u16,
}

impl MatchPoints {
    pub fn set_types(&mut self, kind: HitKind, item_type: ItemType, item_subtype: u16) {
        self.kind = Some(kind);
        self.item_type = item_type;
        self.item_subtype = item_subtype;
    }
}

bitflags! {
    /// Access restrictions of the underlying map item.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Restrictions: u8 {
        const NO_THROUGHFARE = 0x01;
        const NO_ENTRY       = 0x02;
        const NO_EXIT        = 0x04;
        const TOLL           = 0x08;
        const PEDESTRIAN     = 0x10;
        const RESIDENTIAL    = 0x20;
        const SEASONAL       = 0x40;
        const PRIVATE        = 0x80;
    }
}

/// Side of the street a house number or POI sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    #[default]
    Unknown = 0,
    Left = 1,
    Right = 2,
    Both = 3,
}

impl Side {
    pub fn from_u8(v: u8) -> Option<Side> {
        match v {
            0 => Some(Side::Unknown),
            1 => Some(Side::Left),
            2 => Some(Side::Right),
            3 => Some(Side::Both),
            _ => None,
        }
    }
}

/// A user review attached to a point of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: i8,
    pub reviewer: String,
    pub date: String,
    pub text: String,
}

impl Review {
    pub fn new(
        rating: i8,
        reviewer: impl Into<String>,
        date: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            rating,
            reviewer: reviewer.into(),
            date: date.into(),
            text: text.into(),
        }
    }
}
