// crates/searchhit-core/tests/normalize.rs
use searchhit_core::{
    BasicAddressFormatter, Hit, HitKind, IdPair, InfoEntry, InfoKind, InfoLabels, InfoNormalizer,
};

fn entry(kind: InfoKind, value: &str) -> InfoEntry {
    InfoEntry::new(kind, kind.english_label(), value)
}

fn company_with_address_pieces() -> Hit {
    let mut hit = Hit::new(HitKind::Company, IdPair::new(1, 2), 0).with_name("Café");
    hit.infos = vec![
        entry(InfoKind::Text, "Open late"),
        entry(InfoKind::VisAddress, "Storgatan"),
        entry(InfoKind::Url, "https://example.com"),
        entry(InfoKind::VisHouseNbr, "12"),
        entry(InfoKind::VisZipCode, "222 22"),
        entry(InfoKind::VisCompleteZip, "222 22 Lund"),
        entry(InfoKind::VisZipArea, "Lund"),
        entry(InfoKind::VisFullAddress, "Storgatan 12, Lund"),
    ];
    hit
}

#[test]
fn eight_entries_merge_into_four() {
    let mut hit = company_with_address_pieces();
    hit.merge_to_sane_item_infos("en", 0);

    let kinds: Vec<InfoKind> = hit.infos.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InfoKind::VisAddress,
            InfoKind::VisFullAddress,
            InfoKind::Text,
            InfoKind::Url,
        ]
    );
    assert_eq!(hit.infos[0].value, "Storgatan 12");
    assert_eq!(hit.infos[0].key, "Address");
    assert_eq!(hit.infos[1].value, "Storgatan 12, 222 22 Lund");
    assert_eq!(hit.infos[2].value, "Open late");
}

struct Swedish;

impl InfoLabels for Swedish {
    fn label(&self, lang: &str, kind: InfoKind) -> String {
        match (lang, kind) {
            ("sv", InfoKind::VisAddress) => "Adress".into(),
            ("sv", InfoKind::VisFullAddress) => "Fullständig adress".into(),
            _ => kind.english_label().into(),
        }
    }
}

#[test]
fn custom_collaborators_drive_rendering_and_labels() {
    let mut hit = company_with_address_pieces();
    let normalizer = InfoNormalizer::new(
        BasicAddressFormatter::new().with_number_first([44]),
        Swedish,
    );
    normalizer.normalize_hit(&mut hit, "sv", 44);

    assert_eq!(hit.infos.len(), 4);
    assert_eq!(hit.infos[0].key, "Adress");
    assert_eq!(hit.infos[0].value, "12 Storgatan");
    assert_eq!(hit.infos[1].key, "Fullständig adress");
    assert_eq!(hit.infos[1].value, "12 Storgatan, Lund 222 22");
}

#[test]
fn zip_area_without_zip_code_is_appended_bare() {
    let mut hit = Hit::new(HitKind::Street, IdPair::new(1, 3), 0);
    hit.infos = vec![
        entry(InfoKind::VisAddress, "Storgatan 5"),
        entry(InfoKind::VisZipArea, "Lund"),
    ];
    hit.merge_to_sane_item_infos("en", 0);
    assert_eq!(hit.infos[0].value, "Storgatan 5");
    assert_eq!(hit.infos[1].value, "Storgatan 5, Lund");
    assert_eq!(hit.infos.len(), 2);
}
