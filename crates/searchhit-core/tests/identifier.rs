// crates/searchhit-core/tests/identifier.rs
use searchhit_core::ident::{format, parse, parse_bytes};
use searchhit_core::{Coordinate, Hit, HitKind, IdPair, ItemType};

#[test]
fn internal_identifiers_roundtrip_for_every_kind() {
    for (i, kind) in HitKind::ALL.into_iter().enumerate() {
        let mut hit = Hit::new(kind, IdPair::new(0xABCD, 0x1234_0000 + i as u32), 0x2F);
        hit.set_item_type(ItemType(0x1B));
        let back = parse(&format(&hit)).expect("parses");

        assert_eq!(back.kind(), kind);
        assert_eq!(back.id, hit.id);
        assert_eq!(back.offset(), hit.offset());
        assert_eq!(back.item_type(), ItemType(0x1B));
    }
}

#[test]
fn internal_format_layout() {
    let mut hit = Hit::new(HitKind::Misc, IdPair::new(0x10, 0x20), 0);
    hit.set_item_type(ItemType(5));
    assert_eq!(hit.to_identifier(), "m:20:10:0:5");
}

#[test]
fn external_identifiers_roundtrip() {
    let mut hit = Hit::new(HitKind::Company, IdPair::new(1, 2), 0);
    hit.coord = Coordinate::new(-5, 100);
    hit.angle = 90;
    hit.set_item_type(ItemType::POINT_OF_INTEREST);
    hit.ext_id = "abc-1".into();
    hit.ext_source = 3;

    let id = format(&hit);
    assert_eq!(id, "Xc:FFFFFFFB:64:5B:E:abc-1:3");

    let back = Hit::from_identifier(&id).expect("parses");
    assert_eq!(back.kind(), HitKind::Company);
    assert_eq!(back.coord, hit.coord);
    assert_eq!(back.angle, 90);
    assert_eq!(back.item_type(), ItemType::POINT_OF_INTEREST);
    assert_eq!(back.ext_id, "abc-1");
    assert_eq!(back.ext_source, 3);
    assert_eq!(back.id, IdPair::INVALID);
}

#[test]
fn unknown_angle_survives_the_increment() {
    let mut hit = Hit::new(HitKind::Street, IdPair::new(1, 2), 0);
    hit.coord = Coordinate::new(1, 2);
    hit.ext_source = 0x10;
    hit.ext_id = "x".into();
    assert_eq!(hit.angle, u16::MAX);

    let id = format(&hit);
    assert_eq!(id, "Xs:1:2:0:0:x:10");
    assert_eq!(parse(&id).unwrap().angle, u16::MAX);
}

#[test]
fn y_prefix_uses_the_external_grammar() {
    let hit = parse("Yt:A:B:1:F:cat:2").unwrap();
    assert_eq!(hit.kind(), HitKind::Category);
    assert_eq!(hit.coord, Coordinate::new(10, 11));
    assert_eq!(hit.angle, 0);
    assert_eq!(hit.ext_source, 2);
}

#[test]
fn coordinate_probes() {
    let closed = parse("C:664000000:-200:1:Lund").unwrap();
    assert_eq!(closed.kind(), HitKind::BuiltUpArea);
    assert_eq!(closed.item_type(), ItemType::POINT_OF_INTEREST);
    assert_eq!(closed.coord, Coordinate::new(664_000_000, -200));
    assert_eq!(closed.name, "Lund");
    assert_eq!(closed.id, IdPair::INVALID);

    let open = parse("C:0x10:5:0:Main St: 5").unwrap();
    assert_eq!(open.kind(), HitKind::Street);
    assert_eq!(open.item_type(), ItemType::POINT_OF_INTEREST);
    assert_eq!(open.coord, Coordinate::new(16, 5));
    assert_eq!(open.name, "Main St: 5");

    let latin1 = parse_bytes(b"K:1:2:0:Malm\xF6").unwrap();
    assert_eq!(latin1.name, "Malmö");

    let utf8 = parse("C:1:2:0:Malmö").unwrap();
    assert_eq!(utf8.name, "Malmö");

    let octal = parse("C:010:-017:0:x").unwrap();
    assert_eq!(octal.coord, Coordinate::new(8, -15));
}

#[test]
fn malformed_identifiers_are_rejected() {
    let rejects = [
        "",
        "   ",
        "s:1",
        "q:1:2:3:4",
        "s:1:2:3",
        "s:1:2:3:",
        "s:1:2:3:g",
        "s1:2:3:4",
        "s:1x:2:3:4",
        "s:1:2:10000:4",
        "Xs:1:2:3:4:ext",
        "Xq:1:2:3:4:ext:1",
        "C:1:2:closed:name",
        "C:1:2",
        "P:12345678",
    ];
    for input in rejects {
        assert!(parse(input).is_none(), "{input:?} should not parse");
    }
    assert!(parse_bytes(b"C:1:2:0:\xF6").is_none());
}

#[test]
fn whitespace_and_trailing_fields_are_tolerated() {
    let hit = parse("\t a:5:1:0:1:future-field\n").unwrap();
    assert_eq!(hit.kind(), HitKind::Municipal);
    assert_eq!(hit.id, IdPair::new(1, 5));
    assert_eq!(hit.item_type(), ItemType::MUNICIPAL);
}
