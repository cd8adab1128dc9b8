// crates/searchhit-core/src/location.rs

//! # Location Names
//!
//! Turns the region ancestry of a hit into a display string such as
//! `"Centrum, Lund"`.
//!
//! With one eligible direct region the answer is that region's chain. With
//! several, the resolver looks for the region shared by every chain and uses
//! the one with the deepest ancestry; failing that it lists up to three
//! topmost regions separated by `/`.

use crate::kind::KindMask;
use crate::model::{Hit, IdPair};
use crate::text::equals_folded;
use std::collections::{BTreeMap, HashSet};

/// Most chains listed by the fallback.
const MAX_FALLBACK_NAMES: usize = 3;

/// Location name of `hit` over the region kinds in `mask`.
pub fn location_name(hit: &Hit, mask: KindMask) -> String {
    location_name_with_regions(hit, mask).0
}

/// Like [`location_name`], also returning the regions whose names were
/// printed, in output order.
pub fn location_name_with_regions(hit: &Hit, mask: KindMask) -> (String, Vec<&Hit>) {
    let eligible: Vec<&Hit> = eligible_regions(hit, mask).collect();
    match eligible.as_slice() {
        [] => (String::new(), Vec::new()),
        [only] => walk(*only, mask),
        _ => resolve_disjoint(hit, mask),
    }
}

/// Regions printed in the default location name (municipal, built-up area,
/// city part).
pub fn regions_to_print(hit: &Hit) -> Vec<&Hit> {
    location_name_with_regions(hit, KindMask::LOCATION).1
}

impl Hit {
    /// See [`location_name`].
    pub fn create_location_name(&self, mask: KindMask) -> String {
        location_name(self, mask)
    }

    /// Recomputes the stored location name. Kinds in `requested` that are not
    /// region kinds are ignored.
    pub fn update_location_name(&mut self, requested: KindMask) {
        self.location_name = location_name(self, requested & KindMask::REGIONS);
    }

    /// See [`regions_to_print`].
    pub fn regions_to_print(&self) -> Vec<&Hit> {
        regions_to_print(self)
    }
}

fn eligible_regions(hit: &Hit, mask: KindMask) -> impl Iterator<Item = &Hit> {
    hit.regions()
        .iter()
        .map(|link| link.hit())
        .filter(move |region| region.kind().is_in(mask))
}

/// Follows `start` and then each region at index 0, printing eligible names
/// and collapsing case-insensitive repeats.
fn walk(start: &Hit, mask: KindMask) -> (String, Vec<&Hit>) {
    let mut out = String::new();
    let mut printed = Vec::new();
    let mut last = "";
    let mut seen = HashSet::new();

    let mut cur = Some(start);
    while let Some(region) = cur {
        if !seen.insert(region.id) {
            log::warn!("region cycle at {region} while building location name");
            break;
        }
        cur = region.region(0);
        if !region.kind().is_in(mask) || equals_folded(&region.name, last) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&region.name);
        last = &region.name;
        printed.push(region);
    }
    (out, printed)
}

fn resolve_disjoint(hit: &Hit, mask: KindMask) -> (String, Vec<&Hit>) {
    let rows = build_matrix(hit, mask);

    // Ascending id order decides ties between equally deep candidates.
    let mut counts: BTreeMap<IdPair, (usize, &Hit)> = BTreeMap::new();
    for row in &rows {
        for region in row {
            counts.entry(region.id).or_insert((0, *region)).0 += 1;
        }
    }

    let mut best: Option<(usize, &Hit)> = None;
    for &(count, region) in counts.values() {
        if count != rows.len() {
            continue;
        }
        let levels = count_levels(region, mask, &mut Vec::new());
        if best.map_or(true, |(max, _)| levels > max) {
            best = Some((levels, region));
        }
    }

    if let Some((_, common)) = best {
        let found = walk(common, mask);
        if !found.0.is_empty() {
            return found;
        }
    }

    log::trace!(
        "no common region for {hit} over {} chains, listing top regions",
        rows.len()
    );
    let mut out = String::new();
    let mut printed = Vec::new();
    let mut used: Vec<&str> = Vec::new();
    for top in rows.iter().filter_map(|row| row.last().copied()) {
        if !used.iter().any(|name| equals_folded(name, &top.name)) {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&top.name);
            printed.push(top);
        }
        if printed.len() >= MAX_FALLBACK_NAMES {
            break;
        }
        used.push(&top.name);
    }
    (out, printed)
}

/// One row per distinct bottom-to-top chain of eligible regions.
///
/// Every eligible child but the last gets a copy of the current row; the last
/// one extends the row in place.
fn build_matrix(hit: &Hit, mask: KindMask) -> Vec<Vec<&Hit>> {
    let mut rows = vec![Vec::new()];
    expand(&mut rows, 0, hit, mask);
    rows
}

fn expand<'h>(rows: &mut Vec<Vec<&'h Hit>>, row: usize, cur: &'h Hit, mask: KindMask) {
    let children: Vec<&'h Hit> = eligible_regions(cur, mask)
        .filter(|child| {
            let repeated = rows[row].iter().any(|on_path| on_path.id == child.id);
            if repeated {
                log::warn!("region cycle at {child} below {cur}, skipping");
            }
            !repeated
        })
        .collect();

    let Some((&last, rest)) = children.split_last() else {
        return;
    };
    for &child in rest {
        let mut branch = rows[row].clone();
        branch.push(child);
        rows.push(branch);
        let branch_idx = rows.len() - 1;
        expand(rows, branch_idx, child, mask);
    }
    rows[row].push(last);
    expand(rows, row, last, mask);
}

/// Length of the longest chain of eligible regions above `region`.
fn count_levels(region: &Hit, mask: KindMask, path: &mut Vec<IdPair>) -> usize {
    path.push(region.id);
    let mut best = 0;
    for child in eligible_regions(region, mask) {
        if path.contains(&child.id) {
            log::warn!("region cycle at {child} below {region}, skipping");
            continue;
        }
        best = best.max(1 + count_levels(child, mask, path));
    }
    path.pop();
    best
}
