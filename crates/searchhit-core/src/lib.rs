// crates/searchhit-core/src/lib.rs

pub mod config; // Codec buffer thresholds
pub mod error;
pub mod ident; // Textual hit identifiers
pub mod kind;
pub mod location; // Location-name resolver
pub mod model;
pub mod normalize; // Address info merging
pub mod text;
pub mod traits;
pub mod wire; // Binary save/load

// Re-exports
pub use crate::config::CodecConfig;
pub use crate::error::{HitError, Result};
pub use crate::kind::{HitKind, KindMask};
pub use crate::normalize::InfoNormalizer;
pub use crate::traits::{AddressFormatter, BasicAddressFormatter, DefaultInfoLabels, InfoLabels};
pub use crate::wire::{Appended, WireForm, WireReader, WireWriter};
// Export the Model Types
pub use model::{
    BoundingBox, CompanyInfo, Coordinate, Detail, Hit, IdPair, InfoEntry, InfoKind, ItemType,
    MapRights, RegionLink, Restrictions, Review, Side, StreetPosition,
};
