// crates/searchhit-core/src/model/region.rs
use super::hit::Hit;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// A link from a hit to one of its parent regions.
///
/// `Owned` links belong to exactly one hit. `Shared` links point at a region
/// that is also held elsewhere (for example one decoded region attached to
/// many sibling hits); the `Arc` keeps it alive for as long as any link does.
#[derive(Debug)]
pub enum RegionLink {
    Owned(Box<Hit>),
    Shared(Arc<Hit>),
}

impl RegionLink {
    pub fn owned(hit: Hit) -> Self {
        RegionLink::Owned(Box::new(hit))
    }

    pub fn shared(hit: Arc<Hit>) -> Self {
        RegionLink::Shared(hit)
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, RegionLink::Owned(_))
    }

    pub fn hit(&self) -> &Hit {
        match self {
            RegionLink::Owned(hit) => hit,
            RegionLink::Shared(hit) => hit,
        }
    }

}

impl Deref for RegionLink {
    type Target = Hit;

    fn deref(&self) -> &Hit {
        self.hit()
    }
}

/// Cloning always produces an owned deep copy.
impl Clone for RegionLink {
    fn clone(&self) -> Self {
        RegionLink::Owned(Box::new(self.hit().clone()))
    }
}

/// Links compare by the region they point at, not by how it is held.
impl PartialEq for RegionLink {
    fn eq(&self, other: &Self) -> bool {
        self.hit() == other.hit()
    }
}

impl Serialize for RegionLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.hit().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RegionLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Hit::deserialize(deserializer).map(RegionLink::owned)
    }
}
