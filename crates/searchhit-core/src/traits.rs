// crates/searchhit-core/src/traits.rs
use crate::model::InfoKind;
use std::collections::HashSet;

/// National address rendering, consumed by the item-info normalizer.
///
/// All three functions are pure. `top_region` is the id of the country the
/// address belongs to.
pub trait AddressFormatter {
    /// Pulls a leading or trailing house number out of `address`.
    /// Returns `None` when there is no non-zero number to pull.
    fn split_number_and_name(&self, address: &str) -> Option<(u32, String)>;

    fn format_address(&self, top_region: u32, street: &str, house_nbr: &str) -> String;

    fn format_zip(&self, top_region: u32, zip_code: &str, zip_area: &str) -> String;
}

/// Display label of an info kind in a language.
pub trait InfoLabels {
    fn label(&self, lang: &str, kind: InfoKind) -> String;
}

/// Street-then-number rendering, with number-first for selected countries.
///
/// # Examples
/// ```rust
/// use searchhit_core::{AddressFormatter, BasicAddressFormatter};
///
/// let f = BasicAddressFormatter::new().with_number_first([44]);
/// assert_eq!(f.format_address(46, "Storgatan", "12"), "Storgatan 12");
/// assert_eq!(f.format_address(44, "Baker Street", "221"), "221 Baker Street");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasicAddressFormatter {
    number_first: HashSet<u32>,
}

impl BasicAddressFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `house street` and `area zip` for the given top regions.
    pub fn with_number_first(mut self, top_regions: impl IntoIterator<Item = u32>) -> Self {
        self.number_first.extend(top_regions);
        self
    }

    fn is_number_first(&self, top_region: u32) -> bool {
        self.number_first.contains(&top_region)
    }
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{a} {b}"),
    }
}

impl AddressFormatter for BasicAddressFormatter {
    fn split_number_and_name(&self, address: &str) -> Option<(u32, String)> {
        let address = address.trim();
        let (number, name) = match address.split_once(char::is_whitespace) {
            Some((head, tail)) if head.bytes().all(|b| b.is_ascii_digit()) => (head, tail),
            _ => {
                let (head, tail) = address.rsplit_once(char::is_whitespace)?;
                if !tail.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                (tail, head)
            }
        };
        let number: u32 = number.parse().ok()?;
        let name = name.trim();
        (number != 0 && !name.is_empty()).then(|| (number, name.to_string()))
    }

    fn format_address(&self, top_region: u32, street: &str, house_nbr: &str) -> String {
        if self.is_number_first(top_region) {
            join_nonempty(house_nbr, street)
        } else {
            join_nonempty(street, house_nbr)
        }
    }

    fn format_zip(&self, top_region: u32, zip_code: &str, zip_area: &str) -> String {
        if self.is_number_first(top_region) {
            join_nonempty(zip_area, zip_code)
        } else {
            join_nonempty(zip_code, zip_area)
        }
    }
}

/// English labels regardless of the requested language.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInfoLabels;

impl InfoLabels for DefaultInfoLabels {
    fn label(&self, _lang: &str, kind: InfoKind) -> String {
        kind.english_label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_leading_and_trailing_numbers() {
        let f = BasicAddressFormatter::new();
        assert_eq!(
            f.split_number_and_name("Storgatan 12"),
            Some((12, "Storgatan".to_string()))
        );
        assert_eq!(
            f.split_number_and_name("221 Baker Street"),
            Some((221, "Baker Street".to_string()))
        );
        assert_eq!(f.split_number_and_name("Storgatan"), None);
        assert_eq!(f.split_number_and_name("Storgatan 0"), None);
        assert_eq!(f.split_number_and_name("12"), None);
        assert_eq!(f.split_number_and_name("Storgatan 12b"), None);
    }

    #[test]
    fn number_first_regions() {
        let f = BasicAddressFormatter::new().with_number_first([3]);
        assert_eq!(f.format_address(1, "Storgatan", "12"), "Storgatan 12");
        assert_eq!(f.format_address(3, "Baker Street", "221"), "221 Baker Street");
        assert_eq!(f.format_zip(1, "222 22", "Lund"), "222 22 Lund");
        assert_eq!(f.format_zip(3, "NW1", "London"), "London NW1");
        assert_eq!(f.format_address(1, "Storgatan", ""), "Storgatan");
    }

    #[test]
    fn default_labels_are_english() {
        assert_eq!(DefaultInfoLabels.label("sv", InfoKind::VisAddress), "Address");
    }
}
