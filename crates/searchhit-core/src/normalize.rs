// crates/searchhit-core/src/normalize.rs

//! # Item-Info Normalizer
//!
//! Providers deliver addresses in pieces (street, house number, zip code,
//! zip area, sometimes a pre-rendered full address). This pass folds those
//! pieces into one rendered `address` entry and one `full address` entry at
//! the front of the list. Other entries keep their relative order.

use crate::model::{Hit, InfoEntry, InfoKind};
use crate::traits::{AddressFormatter, BasicAddressFormatter, DefaultInfoLabels, InfoLabels};

/// Address pieces pulled out of an info list. Last one seen wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct AddressSlots {
    address: String,
    house_nbr: String,
    zip_code: String,
    complete_zip: String,
    full_address: String,
    zip_area: String,
}

impl AddressSlots {
    fn slot_mut(&mut self, kind: InfoKind) -> Option<&mut String> {
        match kind {
            InfoKind::VisAddress => Some(&mut self.address),
            InfoKind::VisHouseNbr => Some(&mut self.house_nbr),
            InfoKind::VisZipCode => Some(&mut self.zip_code),
            InfoKind::VisCompleteZip => Some(&mut self.complete_zip),
            InfoKind::VisFullAddress => Some(&mut self.full_address),
            InfoKind::VisZipArea => Some(&mut self.zip_area),
            _ => None,
        }
    }

    /// Removes every address piece from `infos`.
    fn take_from(infos: &mut Vec<InfoEntry>) -> Self {
        let mut slots = AddressSlots::default();
        infos.retain(|entry| match slots.slot_mut(entry.kind) {
            Some(slot) => {
                slot.clone_from(&entry.value);
                false
            }
            None => true,
        });
        slots
    }
}

/// Merges address pieces using pluggable formatting and labels.
#[derive(Debug, Clone, Default)]
pub struct InfoNormalizer<F = BasicAddressFormatter, L = DefaultInfoLabels> {
    formatter: F,
    labels: L,
}

impl<F: AddressFormatter, L: InfoLabels> InfoNormalizer<F, L> {
    pub fn new(formatter: F, labels: L) -> Self {
        Self { formatter, labels }
    }

    /// Normalizes `infos` in place. `top_region` selects the national address
    /// format and `lang` the language of the synthesized keys.
    pub fn normalize(&self, infos: &mut Vec<InfoEntry>, lang: &str, top_region: u32) {
        let slots = AddressSlots::take_from(infos);

        let mut address = if slots.address.is_empty() {
            slots.full_address.clone()
        } else {
            slots.address.clone()
        };
        let mut house_nbr = slots.house_nbr.clone();

        if house_nbr.is_empty() {
            if let Some((nbr, street)) = self.formatter.split_number_and_name(&address) {
                address = street;
                house_nbr = nbr.to_string();
            }
        }
        if !house_nbr.is_empty() {
            address = self.formatter.format_address(top_region, &address, &house_nbr);
        }

        let mut full_address = address.clone();
        if !slots.zip_area.is_empty() {
            if !address.is_empty() {
                full_address.push_str(", ");
            }
            if slots.zip_code.is_empty() {
                full_address.push_str(&slots.zip_area);
            } else {
                full_address.push_str(&self.formatter.format_zip(
                    top_region,
                    &slots.zip_code,
                    &slots.zip_area,
                ));
            }
        }

        // Inserted at the front in reverse, so `address` ends up first.
        if !full_address.is_empty() {
            let key = self.labels.label(lang, InfoKind::VisFullAddress);
            infos.insert(0, InfoEntry::new(InfoKind::VisFullAddress, key, full_address));
        }
        if !address.is_empty() {
            let key = self.labels.label(lang, InfoKind::VisAddress);
            infos.insert(0, InfoEntry::new(InfoKind::VisAddress, key, address));
        }
    }

    pub fn normalize_hit(&self, hit: &mut Hit, lang: &str, top_region: u32) {
        self.normalize(&mut hit.infos, lang, top_region);
    }
}

impl Hit {
    /// Normalizes this hit's info entries with the built-in formatter and
    /// English labels.
    pub fn merge_to_sane_item_infos(&mut self, lang: &str, top_region: u32) {
        InfoNormalizer::<BasicAddressFormatter, DefaultInfoLabels>::default()
            .normalize_hit(self, lang, top_region);
    }
}
