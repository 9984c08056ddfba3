//! End-to-end decode tests against the checked-in fixture catalogs.

use hexgene::{
    BitGroups, BodySkin, Class, DecodeError, Layout, PartCatalog, PartType, Region, Tag,
    TraitCatalog, decode_genome, quality_score,
};
use proptest::prelude::*;

/// A real legacy genome: a beast with mixed-class recessives.
const LEGACY_HEX: &str = "0x11c642400a028ca14a428c20cc011080c61180a0820180604233082";

/// An extended genome with an unassigned region and tag group: the region
/// resolves by Japan part marker, the tag by the Bionic mouth skin, and
/// every slot of every part is aquatic.
const EXTENDED_HEX: &str = "0x200000000000000000404030831800000000019004804403000001100480440a0000001004804408000000900480440300000010048044030000001004804403";

fn catalogs() -> (TraitCatalog, PartCatalog) {
    let traits = TraitCatalog::from_json_str(include_str!("fixtures/traits.json"))
        .expect("traits fixture");
    let parts =
        PartCatalog::from_json_str(include_str!("fixtures/parts.json")).expect("parts fixture");
    (traits, parts)
}

#[test]
fn test_legacy_golden_decode() {
    let (traits, parts) = catalogs();
    let genome = decode_genome(LEGACY_HEX, Layout::Legacy, &traits, &parts).unwrap();

    assert_eq!(genome.class, Class::Beast);
    assert_eq!(genome.region, Region::Global);
    assert_eq!(genome.tag, Tag::Default);
    assert_eq!(genome.body_skin, BodySkin::Normal);

    assert_eq!(genome.pattern.d, "000001");
    assert_eq!(genome.pattern.r1, "000111");
    assert_eq!(genome.pattern.r2, "000110");

    assert_eq!(genome.color.d, "f0c66e");
    assert_eq!(genome.color.r1, "ffec51");
    assert_eq!(genome.color.r2, "f0c66e");

    assert_eq!(genome.eyes.dominant.part_id, "eyes-chubby");
    assert_eq!(genome.eyes.recessive1.part_id, "eyes-chubby");
    assert_eq!(genome.eyes.recessive2.part_id, "eyes-papi");
    assert_eq!(genome.ears.dominant.part_id, "ears-sakura");
    assert_eq!(genome.ears.recessive1.part_id, "ears-nyan");
    assert_eq!(genome.ears.recessive2.part_id, "ears-seaslug");
    assert_eq!(genome.mouth.dominant.part_id, "mouth-tiny-turtle");
    assert_eq!(genome.mouth.recessive1.part_id, "mouth-piranha");
    assert_eq!(genome.mouth.recessive2.part_id, "mouth-serious");
    assert_eq!(genome.horn.dominant.part_id, "horn-bamboo-shoot");
    assert_eq!(genome.horn.recessive1.part_id, "horn-lagging");
    assert_eq!(genome.horn.recessive2.part_id, "horn-little-branch");
    assert_eq!(genome.back.dominant.part_id, "back-balloon");
    assert_eq!(genome.back.recessive1.part_id, "back-risky-beast");
    assert_eq!(genome.back.recessive2.part_id, "back-risky-beast");
    assert_eq!(genome.tail.dominant.part_id, "tail-gravel-ant");
    assert_eq!(genome.tail.recessive1.part_id, "tail-hot-butt");
    assert_eq!(genome.tail.recessive2.part_id, "tail-swallow");

    // The dominant slot's class comes from the catalog entry.
    assert_eq!(genome.mouth.dominant.class, Class::Reptile);
    assert_eq!(genome.mouth.dominant.name, "Tiny Turtle");

    assert!(genome.parts().all(|(_, record)| !record.mystic));
    assert_eq!(quality_score(&genome), 23.67);
}

#[test]
fn test_extended_golden_decode() {
    let (traits, parts) = catalogs();
    let genome = decode_genome(EXTENDED_HEX, Layout::Extended, &traits, &parts).unwrap();

    assert_eq!(genome.class, Class::Aquatic);
    // Region group is all zeros; the eyes group's leading 0011 marker
    // resolves Japan.
    assert_eq!(genome.region, Region::Japan);
    // Tag group is all zeros; the Bionic mouth skin infers Agamogenesis.
    assert_eq!(genome.tag, Tag::Agamogenesis);
    assert_eq!(genome.body_skin, BodySkin::Normal);

    assert_eq!(genome.pattern.d, "000000001");
    assert_eq!(genome.pattern.r1, "000000010");
    assert_eq!(genome.pattern.r2, "000000011");

    assert_eq!(genome.color.d, "4cffdf");
    assert_eq!(genome.color.r1, "2de8f2");
    assert_eq!(genome.color.r2, "ff5a71");

    // The Japan eyes skin picks the skin-specific trait name; its
    // recessives share the skin but fall back to the global variant.
    assert_eq!(genome.eyes.dominant.part_id, "eyes-kabuki");
    assert_eq!(genome.eyes.dominant.special_genes, ["japan"]);
    assert_eq!(genome.eyes.recessive1.part_id, "eyes-sleepless");
    assert_eq!(genome.eyes.recessive2.part_id, "eyes-telescope");

    assert_eq!(genome.mouth.dominant.part_id, "mouth-lam");
    assert_eq!(genome.ears.recessive2.part_id, "ears-seaslug");
    assert_eq!(genome.back.recessive1.part_id, "back-blue-moon");
    assert_eq!(genome.tail.dominant.part_id, "tail-koi");

    // Only the horn carries the 0001 mystic skin.
    assert!(genome.horn.mystic);
    for part_type in [PartType::Eyes, PartType::Ears, PartType::Mouth, PartType::Back, PartType::Tail] {
        assert!(!genome.part(part_type).mystic, "{part_type} should not be mystic");
    }

    // Every slot of every part is aquatic.
    assert_eq!(quality_score(&genome), 100.0);
}

#[test]
fn test_decode_is_deterministic() {
    let (traits, parts) = catalogs();
    let first = decode_genome(LEGACY_HEX, Layout::Legacy, &traits, &parts).unwrap();
    let second = decode_genome(LEGACY_HEX, Layout::Legacy, &traits, &parts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_hex_yields_no_genome() {
    let (traits, parts) = catalogs();
    let err = decode_genome("0x11c6424zz028c", Layout::Legacy, &traits, &parts).unwrap_err();
    assert_eq!(err, DecodeError::InvalidHex { digit: 'z' });
}

#[test]
fn test_unrecognized_class_bits_fail() {
    let (traits, parts) = catalogs();
    // Pad the golden hex to the full 64 digits and force the leading class
    // bits to 0110, which no class codes.
    let hex = format!("6{}{}", "0".repeat(8), &LEGACY_HEX[2..]);
    assert_eq!(hex.len(), 64);
    let err = decode_genome(&hex, Layout::Legacy, &traits, &parts).unwrap_err();
    assert_eq!(err, DecodeError::UnrecognizedClass { bits: "0110".to_string() });
}

#[test]
fn test_all_zero_extended_region_without_marker_fails() {
    let (traits, parts) = catalogs();
    // 512 zero bits: class resolves (Beast), the region group is the
    // all-zero sentinel and no part carries the Japan marker.
    let err = decode_genome(&"0".repeat(128), Layout::Extended, &traits, &parts).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnrecognizedRegion { bits: "0".repeat(18) }
    );
}

#[test]
fn test_unknown_part_value_bits_fail_on_first_part() {
    let (traits, parts) = catalogs();
    // An all-zero legacy genome resolves every global field but none of
    // its part values exist in the catalog; eyes decode first.
    let err = decode_genome(&"0".repeat(64), Layout::Legacy, &traits, &parts).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnrecognizedPartBin {
            class: Class::Beast,
            part_type: PartType::Eyes,
            bits: "000000".to_string(),
        }
    );
}

#[test]
fn test_long_input_decodes_from_trailing_bits() {
    let (traits, parts) = catalogs();
    // 65 hex digits expand past 256 bits; the excess leading zeros are
    // discarded rather than rejected.
    let padded = format!("0x{}{}", "0".repeat(10), &LEGACY_HEX[2..]);
    assert_eq!(padded.len() - 2, 65);
    let plain = decode_genome(LEGACY_HEX, Layout::Legacy, &traits, &parts).unwrap();
    let long = decode_genome(&padded, Layout::Legacy, &traits, &parts).unwrap();
    assert_eq!(plain, long);
}

proptest! {
    #[test]
    fn prop_bit_width_round_trip(hex in "[0-9a-fA-F]{0,200}") {
        let legacy = BitGroups::parse(&hex, Layout::Legacy).unwrap();
        prop_assert_eq!(legacy.bits().len(), 256);
        let extended = BitGroups::parse(&hex, Layout::Extended).unwrap();
        prop_assert_eq!(extended.bits().len(), 512);
    }

    #[test]
    fn prop_non_hex_digit_is_rejected(
        prefix in "[0-9a-f]{0,12}",
        bad in "[g-w]",
        suffix in "[0-9a-f]{0,12}",
    ) {
        let hex = format!("{prefix}{bad}{suffix}");
        let is_invalid_hex = matches!(
            BitGroups::parse(&hex, Layout::Legacy),
            Err(DecodeError::InvalidHex { .. })
        );
        prop_assert!(is_invalid_hex);
    }

    #[test]
    fn prop_expansion_is_deterministic(hex in "[0-9a-f]{0,128}") {
        let first = BitGroups::parse(&hex, Layout::Extended).unwrap();
        let second = BitGroups::parse(&hex, Layout::Extended).unwrap();
        prop_assert_eq!(first.bits(), second.bits());
    }
}
