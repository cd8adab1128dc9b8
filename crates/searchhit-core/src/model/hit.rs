// crates/searchhit-core/src/model/hit.rs

//! # Search Hit
//!
//! [`Hit`] holds the fields every search result shares. What differs per kind
//! lives in [`Detail`], a closed enum, so every codec path is checked for
//! exhaustiveness at compile time.

use super::info::InfoEntry;
use super::region::RegionLink;
use super::types::{
    BoundingBox, Coordinate, IdPair, ItemType, MapRights, MatchPoints, Restrictions, Review, Side,
};
use crate::error::{HitError, Result};
use crate::kind::HitKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::Arc;

/// Angle value meaning "unknown".
pub const UNKNOWN_ANGLE: u16 = u16::MAX;

fn unknown_angle() -> u16 {
    UNKNOWN_ANGLE
}

/// Where on a street segment a street or POI hit sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetPosition {
    pub segment_id: u32,
    pub offset: u16,
    pub house_nbr: u16,
    pub side: Side,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetInfo {
    #[serde(flatten)]
    pub position: StreetPosition,
    /// Render the house number before the street name.
    pub number_first: bool,
    /// Put a comma between street name and house number.
    pub number_comma: bool,
}

/// Company and person hits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    #[serde(flatten)]
    pub position: StreetPosition,
    pub special_image: String,
    /// The name with any street address stripped.
    pub clean_name: String,
    pub categories: Vec<u32>,
    pub image_urls: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub top_region: u32,
}

impl Default for CountryInfo {
    fn default() -> Self {
        Self {
            top_region: u32::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscInfo {
    pub misc_type: u32,
}

/// Overview hits point at an item in an overview map, used only to look up
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewInfo {
    pub overview_id: IdPair,
    pub radius_meters: u32,
    pub removed_chars: u8,
}

impl Default for OverviewInfo {
    fn default() -> Self {
        Self {
            overview_id: IdPair::INVALID,
            radius_meters: 0,
            removed_chars: 0,
        }
    }
}

/// Kind-specific part of a [`Hit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detail {
    Street(StreetInfo),
    Company(CompanyInfo),
    /// Municipal, built-up area, city part, zip code and zip area.
    Region,
    Country(CountryInfo),
    Category,
    Misc(MiscInfo),
    Overview(OverviewInfo),
}

impl Detail {
    fn for_kind(kind: HitKind, offset: u16) -> Detail {
        let position = StreetPosition {
            offset,
            ..StreetPosition::default()
        };
        match kind {
            HitKind::Street => Detail::Street(StreetInfo {
                position,
                ..StreetInfo::default()
            }),
            HitKind::Company | HitKind::Person => Detail::Company(CompanyInfo {
                position,
                ..CompanyInfo::default()
            }),
            HitKind::Category => Detail::Category,
            HitKind::Misc => Detail::Misc(MiscInfo::default()),
            HitKind::Country => Detail::Country(CountryInfo::default()),
            HitKind::Municipal
            | HitKind::BuiltUpArea
            | HitKind::CityPart
            | HitKind::ZipCode
            | HitKind::ZipArea => Detail::Region,
        }
    }

    /// Overview details go with any kind; every other variant only with the
    /// kinds [`Hit::new`] gives it to.
    fn fits(&self, kind: HitKind) -> bool {
        match self {
            Detail::Overview(_) => true,
            detail => mem::discriminant(detail) == mem::discriminant(&Detail::for_kind(kind, 0)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Detail::Street(_) => "street",
            Detail::Company(_) => "company",
            Detail::Region => "region",
            Detail::Country(_) => "country",
            Detail::Category => "category",
            Detail::Misc(_) => "misc",
            Detail::Overview(_) => "overview",
        }
    }
}

/// A single search result.
///
/// Deserialization is checked: the detail must fit the kind and every region
/// must be a region kind, as with [`Hit::new`] and [`Hit::add_region`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HitRepr")]
pub struct Hit {
    kind: HitKind,
    item_type: ItemType,
    item_subtype: u16,
    pub id: IdPair,
    pub coord: Coordinate,
    pub bbox: BoundingBox,
    regions: Vec<RegionLink>,
    pub infos: Vec<InfoEntry>,
    /// Meters from the caller-supplied origin, 0 when unset.
    pub distance: u32,
    pub restrictions: Restrictions,
    pub points: MatchPoints,
    pub name: String,
    pub location_name: String,
    pub alpha_sort_name: String,
    pub synonym_name: Option<String>,
    /// 0 means the hit comes from the internal map engine.
    pub ext_source: u16,
    /// Provider id, meaningful only when `ext_source != 0`.
    pub ext_id: String,
    pub angle: u16,
    pub additional_info: bool,
    pub map_rights: MapRights,
    detail: Detail,
}

/// Unchecked field set of a [`Hit`] as it appears in JSON.
#[derive(Deserialize)]
struct HitRepr {
    kind: HitKind,
    item_type: ItemType,
    #[serde(default)]
    item_subtype: u16,
    id: IdPair,
    #[serde(default)]
    coord: Coordinate,
    #[serde(default)]
    bbox: BoundingBox,
    #[serde(default)]
    regions: Vec<RegionLink>,
    #[serde(default)]
    infos: Vec<InfoEntry>,
    #[serde(default)]
    distance: u32,
    #[serde(default)]
    restrictions: Restrictions,
    #[serde(default)]
    points: MatchPoints,
    #[serde(default)]
    name: String,
    #[serde(default)]
    location_name: String,
    #[serde(default)]
    alpha_sort_name: String,
    #[serde(default)]
    synonym_name: Option<String>,
    #[serde(default)]
    ext_source: u16,
    #[serde(default)]
    ext_id: String,
    #[serde(default = "unknown_angle")]
    angle: u16,
    #[serde(default)]
    additional_info: bool,
    #[serde(default)]
    map_rights: MapRights,
    detail: Detail,
}

impl TryFrom<HitRepr> for Hit {
    type Error = HitError;

    fn try_from(repr: HitRepr) -> Result<Self> {
        if !repr.detail.fits(repr.kind) {
            return Err(HitError::InvalidData(format!(
                "{:?} hit cannot carry {} details",
                repr.kind,
                repr.detail.label()
            )));
        }
        let mut hit = Hit {
            kind: repr.kind,
            item_type: repr.item_type,
            item_subtype: repr.item_subtype,
            id: repr.id,
            coord: repr.coord,
            bbox: repr.bbox,
            regions: Vec::with_capacity(repr.regions.len()),
            infos: repr.infos,
            distance: repr.distance,
            restrictions: repr.restrictions,
            points: repr.points,
            name: repr.name,
            location_name: repr.location_name,
            alpha_sort_name: repr.alpha_sort_name,
            synonym_name: repr.synonym_name,
            ext_source: repr.ext_source,
            ext_id: repr.ext_id,
            angle: repr.angle,
            additional_info: repr.additional_info,
            map_rights: repr.map_rights,
            detail: repr.detail,
        };
        for link in repr.regions {
            hit.add_region(link)?;
        }
        hit.refresh_point_types();
        Ok(hit)
    }
}

impl Hit {
    /// Creates an empty hit of `kind`.
    ///
    /// `offset` is kept by street, company and person hits only.
    pub fn new(kind: HitKind, id: IdPair, offset: u16) -> Self {
        let item_type = kind.default_item_type();
        let mut points = MatchPoints::default();
        points.set_types(kind, item_type, 0);
        Self {
            kind,
            item_type,
            item_subtype: 0,
            id,
            coord: Coordinate::INVALID,
            bbox: BoundingBox::EMPTY,
            regions: Vec::new(),
            infos: Vec::new(),
            distance: 0,
            restrictions: Restrictions::empty(),
            points,
            name: String::new(),
            location_name: String::new(),
            alpha_sort_name: String::new(),
            synonym_name: None,
            ext_source: 0,
            ext_id: String::new(),
            angle: UNKNOWN_ANGLE,
            additional_info: false,
            map_rights: MapRights::default(),
            detail: Detail::for_kind(kind, offset),
        }
    }

    /// Creates an empty overview hit carrying `kind`.
    pub fn new_overview(kind: HitKind, id: IdPair) -> Self {
        let mut hit = Hit::new(kind, id, 0);
        hit.detail = Detail::Overview(OverviewInfo::default());
        hit.set_item_type(ItemType::NUMBER_OF_TYPES);
        hit
    }

    /// Builder-style name setter, handy in tests and demos.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // ------------------------------------------------------------------------
    // Kind and detail
    // ------------------------------------------------------------------------

    #[inline]
    pub fn kind(&self) -> HitKind {
        self.kind
    }

    #[inline]
    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    #[inline]
    pub fn detail_mut(&mut self) -> &mut Detail {
        &mut self.detail
    }

    pub fn is_overview(&self) -> bool {
        matches!(self.detail, Detail::Overview(_))
    }

    pub fn is_region(&self) -> bool {
        self.kind.is_region()
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn set_item_type(&mut self, item_type: ItemType) {
        self.item_type = item_type;
        self.points.set_types(self.kind, item_type, self.item_subtype);
    }

    pub fn item_subtype(&self) -> u16 {
        self.item_subtype
    }

    pub fn set_item_subtype(&mut self, subtype: u16) {
        self.item_subtype = subtype;
        self.points.set_types(self.kind, self.item_type, subtype);
    }

    /// Restores the ranking context of `points` from the hit's own types.
    pub(crate) fn refresh_point_types(&mut self) {
        self.points
            .set_types(self.kind, self.item_type, self.item_subtype);
    }

    /// Segment offset for street, company and person hits, 0 otherwise.
    pub fn offset(&self) -> u16 {
        self.street_position().map(|p| p.offset).unwrap_or(0)
    }

    pub fn street_position(&self) -> Option<&StreetPosition> {
        match &self.detail {
            Detail::Street(street) => Some(&street.position),
            Detail::Company(company) => Some(&company.position),
            _ => None,
        }
    }

    pub fn company(&self) -> Option<&CompanyInfo> {
        match &self.detail {
            Detail::Company(company) => Some(company),
            _ => None,
        }
    }

    pub fn company_mut(&mut self) -> Option<&mut CompanyInfo> {
        match &mut self.detail {
            Detail::Company(company) => Some(company),
            _ => None,
        }
    }

    /// Category ids of a company or person hit; empty for every other kind.
    pub fn categories(&self) -> &[u32] {
        self.company().map(|c| c.categories.as_slice()).unwrap_or(&[])
    }

    /// Top-region id of a country hit.
    pub fn top_region(&self) -> Option<u32> {
        match &self.detail {
            Detail::Country(country) => Some(country.top_region),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------------

    pub fn nbr_regions(&self) -> usize {
        self.regions.len()
    }

    /// Region at `index`, or `None` when out of range.
    pub fn region(&self, index: usize) -> Option<&Hit> {
        self.regions.get(index).map(RegionLink::hit)
    }

    pub fn regions(&self) -> &[RegionLink] {
        &self.regions
    }

    /// Appends a parent region. Non-region kinds are rejected.
    pub fn add_region(&mut self, link: RegionLink) -> Result<()> {
        if !link.is_region() {
            return Err(HitError::NotARegion(link.kind()));
        }
        self.regions.push(link);
        Ok(())
    }

    /// Appends an owned copy of `region`.
    pub fn add_region_owned(&mut self, region: Hit) -> Result<()> {
        self.add_region(RegionLink::owned(region))
    }

    /// Appends a region shared with other hits.
    pub fn add_region_shared(&mut self, region: Arc<Hit>) -> Result<()> {
        self.add_region(RegionLink::shared(region))
    }

    /// Replaces the region list.
    ///
    /// With `copy` every link is turned into an owned deep copy; otherwise the
    /// links are attached as given.
    pub fn set_regions(&mut self, links: Vec<RegionLink>, copy: bool) -> Result<()> {
        if let Some(bad) = links.iter().find(|l| !l.is_region()) {
            return Err(HitError::NotARegion(bad.kind()));
        }
        self.regions = if copy {
            links
                .into_iter()
                .map(|link| match link {
                    RegionLink::Shared(shared) => RegionLink::owned(Hit::clone(&shared)),
                    owned => owned,
                })
                .collect()
        } else {
            links
        };
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Infos
    // ------------------------------------------------------------------------

    pub fn nbr_infos(&self) -> usize {
        self.infos.len()
    }

    /// Info entry at `index`, or `None` when out of range.
    pub fn info(&self, index: usize) -> Option<&InfoEntry> {
        self.infos.get(index)
    }

    // ------------------------------------------------------------------------
    // Ordering helpers
    // ------------------------------------------------------------------------

    pub fn cmp_by_id(&self, other: &Hit) -> Ordering {
        self.id.cmp(&other.id)
    }

    pub fn cmp_by_id_and_name(&self, other: &Hit) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:\"{}\"", self.kind.type_char(), self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_defaults() {
        let hit = Hit::new(HitKind::Street, IdPair::new(1, 2), 7);
        assert_eq!(hit.kind(), HitKind::Street);
        assert_eq!(hit.item_type(), ItemType::STREET_SEGMENT);
        assert_eq!(hit.offset(), 7);
        assert_eq!(hit.angle, UNKNOWN_ANGLE);
        assert_eq!(hit.coord, Coordinate::INVALID);
        assert_eq!(hit.bbox, BoundingBox::EMPTY);
        assert_eq!(hit.nbr_regions(), 0);
        assert!(hit.synonym_name.is_none());

        let country = Hit::new(HitKind::Country, IdPair::new(0, 1), 9);
        assert_eq!(country.top_region(), Some(u32::MAX));
        assert_eq!(country.offset(), 0);

        let person = Hit::new(HitKind::Person, IdPair::new(0, 1), 3);
        assert!(person.company().is_some());
        assert_eq!(person.offset(), 3);
    }

    #[test]
    fn non_regions_are_rejected_as_regions() {
        let mut hit = Hit::new(HitKind::Company, IdPair::new(1, 1), 0);
        let street = Hit::new(HitKind::Street, IdPair::new(1, 2), 0);
        assert!(matches!(
            hit.add_region_owned(street),
            Err(HitError::NotARegion(HitKind::Street))
        ));
        let city = Hit::new(HitKind::Municipal, IdPair::new(1, 3), 0);
        hit.add_region_owned(city).unwrap();
        assert_eq!(hit.nbr_regions(), 1);
        assert!(hit.region(1).is_none());
        assert!(hit.info(0).is_none());
    }

    #[test]
    fn clone_owns_every_region() {
        let shared = Arc::new(Hit::new(HitKind::Municipal, IdPair::new(1, 3), 0).with_name("Lund"));
        let mut hit = Hit::new(HitKind::Street, IdPair::new(1, 1), 0);
        hit.add_region_shared(shared.clone()).unwrap();
        assert!(!hit.regions()[0].is_owned());

        let copy = hit.clone();
        assert!(copy.regions()[0].is_owned());
        assert_eq!(copy, hit);
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    fn set_regions_with_copy_detaches_shared_links() {
        let shared = Arc::new(Hit::new(HitKind::CityPart, IdPair::new(2, 3), 0));
        let mut hit = Hit::new(HitKind::Street, IdPair::new(1, 1), 0);
        hit.set_regions(vec![RegionLink::shared(shared.clone())], true)
            .unwrap();
        assert!(hit.regions()[0].is_owned());
        hit.set_regions(vec![RegionLink::shared(shared)], false)
            .unwrap();
        assert!(!hit.regions()[0].is_owned());
    }

    #[test]
    fn display_for_logs() {
        let hit = Hit::new(HitKind::Municipal, IdPair::new(4, 17), 0).with_name("Lund");
        assert_eq!(hit.to_string(), "a:4.17:\"Lund\"");
    }

    #[test]
    fn ordering_by_id_then_name() {
        let a = Hit::new(HitKind::Street, IdPair::new(1, 1), 0).with_name("b");
        let b = Hit::new(HitKind::Street, IdPair::new(1, 1), 0).with_name("a");
        assert_eq!(a.cmp_by_id(&b), Ordering::Equal);
        assert_eq!(a.cmp_by_id_and_name(&b), Ordering::Greater);
    }
}
