// crates/searchhit-core/src/wire/hit.rs

//! Record layout of one hit.
//!
//! ```text
//! class|0x8000_0000  kind-mask  length
//! name  location-name  alpha-sort-name
//! [full block]
//! map-rights  map-id  item-id  lat  lon
//! region-count  region*          (always compact)
//! additional-info
//! ---- end of length-covered record ----
//! kind trailer
//! ```

use super::buffer::{WireReader, WireWriter};
use super::WireForm;
use crate::config::CodecConfig;
use crate::error::{HitError, Result};
use crate::kind::HitKind;
use crate::model::{
    CompanyInfo, Detail, Hit, IdPair, InfoEntry, InfoKind, ItemType, MapRights, Restrictions,
    Review, Side, StreetPosition,
};

pub(crate) const CLASS_VANILLA: u32 = 1;
pub(crate) const CLASS_OVERVIEW: u32 = 2;
pub(crate) const NEW_VERSION_BIT: u32 = 0x8000_0000;

/// Region chains deeper than this are treated as corrupt.
const MAX_REGION_DEPTH: usize = 64;

/// Smallest possible encoded region: header, three empty names, the fixed
/// words and the trailer byte.
const MIN_REGION_BYTES: usize = 12 + 3 + 8 + 16 + 4 + 1 + 1;

// ----------------------------------------------------------------------------
// Save
// ----------------------------------------------------------------------------

pub(super) fn save(
    hit: &Hit,
    w: &mut WireWriter,
    form: WireForm,
    cfg: &CodecConfig,
    nested: bool,
) -> Result<usize> {
    let margin = if nested {
        cfg.mid_write_free
    } else {
        cfg.min_free
    };
    w.ensure_free(margin, cfg.grow_by);
    w.align(4);

    let start = w.position();
    let class = if hit.is_overview() {
        CLASS_OVERVIEW
    } else {
        CLASS_VANILLA
    };
    w.put_u32(class | NEW_VERSION_BIT);
    w.put_u32(hit.kind().mask().bits());
    let length_at = w.reserve_u32();

    w.put_str(&hit.name)?;
    w.put_str(&hit.location_name)?;
    w.put_str(&hit.alpha_sort_name)?;

    if form == WireForm::Full {
        save_full_block(hit, w)?;
    }

    w.put_u64(hit.map_rights.0);
    w.put_u32(hit.id.map_id);
    w.put_u32(hit.id.item_id);
    w.put_i32(hit.coord.lat);
    w.put_i32(hit.coord.lon);

    w.put_count(hit.nbr_regions())?;
    for region in hit.regions() {
        save(region, w, WireForm::Compact, cfg, true)?;
    }
    w.put_bool(hit.additional_info);

    let length = w.position() - (length_at + 4);
    let length = u32::try_from(length)
        .map_err(|_| HitError::InvalidData(format!("record of {length} bytes is too long")))?;
    w.patch_u32(length_at, length);

    save_trailer(hit, w)?;
    Ok(w.position() - start)
}

fn save_full_block(hit: &Hit, w: &mut WireWriter) -> Result<()> {
    w.put_u16(hit.item_type().0);
    w.put_u32(u32::from(hit.item_subtype()));
    w.put_u32(hit.points.score);
    w.put_u32(hit.distance);
    w.put_u16(hit.angle);
    w.put_u16(hit.ext_source);
    w.put_str(&hit.ext_id)?;
    w.put_str(hit.synonym_name.as_deref().unwrap_or(""))?;

    w.put_count(hit.infos.len())?;
    for info in &hit.infos {
        w.put_u32(info.kind.code());
        w.put_str(&info.key)?;
        w.put_str(&info.value)?;
    }
    w.align(4);
    Ok(())
}

fn save_position(pos: &StreetPosition, restrictions: Restrictions, w: &mut WireWriter) {
    w.put_u32(pos.segment_id);
    w.put_u16(pos.offset);
    w.put_u16(pos.house_nbr);
    w.put_u8(pos.side as u8);
    w.put_u8(restrictions.bits());
}

fn save_trailer(hit: &Hit, w: &mut WireWriter) -> Result<()> {
    let restrictions = hit.restrictions.bits();
    match hit.detail() {
        Detail::Street(street) => {
            save_position(&street.position, hit.restrictions, w);
            w.put_bool(street.number_first);
            w.put_bool(street.number_comma);
        }
        Detail::Company(company) => save_company(company, hit.restrictions, w)?,
        Detail::Region | Detail::Category => w.put_u8(restrictions),
        Detail::Country(country) => {
            w.put_u8(restrictions);
            w.put_u32(country.top_region);
        }
        Detail::Misc(misc) => {
            w.put_u32(misc.misc_type);
            w.put_u8(restrictions);
        }
        Detail::Overview(overview) => {
            w.put_u8(restrictions);
            w.put_u32(overview.overview_id.map_id);
            w.put_u32(overview.overview_id.item_id);
            w.put_u32(overview.radius_meters);
            w.put_u8(overview.removed_chars);
        }
    }
    Ok(())
}

fn save_company(company: &CompanyInfo, restrictions: Restrictions, w: &mut WireWriter) -> Result<()> {
    save_position(&company.position, restrictions, w);
    w.put_str(&company.special_image)?;
    w.put_str(&company.clean_name)?;
    w.put_count(company.categories.len())?;
    for cat in &company.categories {
        w.put_u32(*cat);
    }
    // Both counts come before either list.
    w.put_count(company.image_urls.len())?;
    w.put_count(company.reviews.len())?;
    for url in &company.image_urls {
        w.put_str(url)?;
    }
    for review in &company.reviews {
        w.put_i8(review.rating);
        w.put_str(&review.reviewer)?;
        w.put_str(&review.date)?;
        w.put_str(&review.text)?;
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Load
// ----------------------------------------------------------------------------

pub(super) fn load(r: &mut WireReader<'_>, form: WireForm, depth: usize) -> Result<Hit> {
    if depth > MAX_REGION_DEPTH {
        return Err(HitError::InvalidData(format!(
            "region chain deeper than {MAX_REGION_DEPTH} at offset {}",
            r.position()
        )));
    }

    r.align(4);
    let header_at = r.position();
    let class_word = r.get_u32()?;
    let kind_bits = r.get_u32()?;
    if class_word & NEW_VERSION_BIT == 0 {
        log::debug!("old-version hit record at offset {header_at}");
    }
    let kind = HitKind::from_bits(kind_bits).ok_or(HitError::UnknownKind(kind_bits))?;
    let mut hit = if class_word & !NEW_VERSION_BIT == CLASS_VANILLA {
        Hit::new(kind, IdPair::INVALID, 0)
    } else {
        Hit::new_overview(kind, IdPair::INVALID)
    };

    let length = r.get_u32()? as usize;
    let record_start = r.position();
    let record_end = record_start.saturating_add(length);

    hit.name = r.get_str()?;
    hit.location_name = r.get_str()?;
    hit.alpha_sort_name = r.get_str()?;

    if form == WireForm::Full {
        load_full_block(&mut hit, r)?;
    }

    hit.map_rights = MapRights(r.get_u64()?);
    hit.id = IdPair::new(r.get_u32()?, r.get_u32()?);
    hit.coord.lat = r.get_i32()?;
    hit.coord.lon = r.get_i32()?;

    let nbr_regions = r.get_count(MIN_REGION_BYTES)?;
    for _ in 0..nbr_regions {
        let region = load(r, WireForm::Compact, depth + 1)?;
        hit.add_region_owned(region)?;
    }
    hit.additional_info = r.get_bool()?;

    let pos = r.position();
    if pos > record_end {
        return Err(HitError::InvalidData(format!(
            "record at offset {header_at} declares {length} bytes but uses {}",
            pos - record_start
        )));
    }
    if pos < record_end {
        log::debug!(
            "skipping {} unknown bytes in {} record at offset {header_at}",
            record_end - pos,
            kind.type_char()
        );
        r.seek(record_end)?;
    }

    load_trailer(&mut hit, r)?;
    hit.refresh_point_types();
    Ok(hit)
}

fn load_full_block(hit: &mut Hit, r: &mut WireReader<'_>) -> Result<()> {
    hit.set_item_type(ItemType(r.get_u16()?));
    // The subtype travels as a word but only 16 bits are meaningful.
    hit.set_item_subtype(r.get_u32()? as u16);
    hit.points.score = r.get_u32()?;
    hit.distance = r.get_u32()?;
    hit.angle = r.get_u16()?;
    hit.ext_source = r.get_u16()?;
    hit.ext_id = r.get_str()?;
    let synonym = r.get_str()?;
    hit.synonym_name = (!synonym.is_empty()).then_some(synonym);

    let nbr_infos = r.get_count(4 + 2)?;
    hit.infos = Vec::with_capacity(nbr_infos);
    for _ in 0..nbr_infos {
        let code = r.get_u32()?;
        let kind = InfoKind::from_code(code).ok_or(HitError::UnknownInfoKind(code))?;
        let key = r.get_str()?;
        let value = r.get_str()?;
        hit.infos.push(InfoEntry { kind, key, value });
    }
    r.align(4);
    Ok(())
}

fn load_position(r: &mut WireReader<'_>) -> Result<(StreetPosition, Restrictions)> {
    let segment_id = r.get_u32()?;
    let offset = r.get_u16()?;
    let house_nbr = r.get_u16()?;
    let side_byte = r.get_u8()?;
    let side = Side::from_u8(side_byte)
        .ok_or_else(|| HitError::InvalidData(format!("unknown street side {side_byte}")))?;
    let restrictions = Restrictions::from_bits_retain(r.get_u8()?);
    Ok((
        StreetPosition {
            segment_id,
            offset,
            house_nbr,
            side,
        },
        restrictions,
    ))
}

fn load_trailer(hit: &mut Hit, r: &mut WireReader<'_>) -> Result<()> {
    let mut restrictions = Restrictions::empty();
    match hit.detail_mut() {
        Detail::Street(street) => {
            let (position, restr) = load_position(r)?;
            street.position = position;
            restrictions = restr;
            street.number_first = r.get_bool()?;
            street.number_comma = r.get_bool()?;
        }
        Detail::Company(company) => restrictions = load_company(company, r)?,
        Detail::Region | Detail::Category => {
            restrictions = Restrictions::from_bits_retain(r.get_u8()?);
        }
        Detail::Country(country) => {
            restrictions = Restrictions::from_bits_retain(r.get_u8()?);
            country.top_region = r.get_u32()?;
        }
        Detail::Misc(misc) => {
            misc.misc_type = r.get_u32()?;
            restrictions = Restrictions::from_bits_retain(r.get_u8()?);
        }
        Detail::Overview(overview) => {
            restrictions = Restrictions::from_bits_retain(r.get_u8()?);
            overview.overview_id = IdPair::new(r.get_u32()?, r.get_u32()?);
            overview.radius_meters = r.get_u32()?;
            overview.removed_chars = r.get_u8()?;
        }
    }
    hit.restrictions = restrictions;
    Ok(())
}

fn load_company(company: &mut CompanyInfo, r: &mut WireReader<'_>) -> Result<Restrictions> {
    let (position, restrictions) = load_position(r)?;
    company.position = position;
    company.special_image = r.get_str()?;
    company.clean_name = r.get_str()?;

    let nbr_categories = r.get_count(4)?;
    company.categories = (0..nbr_categories)
        .map(|_| r.get_u32())
        .collect::<Result<_>>()?;

    let nbr_images = r.get_count(1)?;
    let nbr_reviews = r.get_count(0)?;
    company.image_urls = (0..nbr_images)
        .map(|_| r.get_str())
        .collect::<Result<_>>()?;
    company.reviews = Vec::with_capacity(nbr_reviews.min(r.remaining() / 4));
    for _ in 0..nbr_reviews {
        let rating = r.get_i8()?;
        company.reviews.push(Review {
            rating,
            reviewer: r.get_str()?,
            date: r.get_str()?,
            text: r.get_str()?,
        });
    }
    Ok(restrictions)
}
