// crates/searchhit-core/src/model/mod.rs

//! # Hit Data Model
//!
//! **Structure:** `Hit` -> `Vec<RegionLink>` -> `Hit` (region) -> ...
//!
//! A hit's region list is ordered and index 0 is the parent the resolver
//! follows when walking a region's own ancestry.

pub mod hit;
pub mod info;
pub mod region;
pub mod types;

pub use hit::{
    CompanyInfo, CountryInfo, Detail, Hit, MiscInfo, OverviewInfo, StreetInfo, StreetPosition,
    UNKNOWN_ANGLE,
};
pub use info::{InfoEntry, InfoKind};
pub use region::RegionLink;
pub use types::{
    BoundingBox, Coordinate, IdPair, ItemType, MapRights, MatchPoints, Restrictions, Review, Side,
};
